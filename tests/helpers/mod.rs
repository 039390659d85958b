pub mod test_pdf;
