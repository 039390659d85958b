mod composite_file_loader_test;
mod docx_adapter_test;
mod pdf_adapter_test;
mod plain_text_adapter_test;
