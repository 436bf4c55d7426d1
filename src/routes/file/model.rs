use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PdfExtraction {
    pub url: String,
    pub text: &'static str,
    pub pages: u32,
    pub file_size: &'static str,
    pub extraction_method: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ImageConversion {
    pub original_url: String,
    pub converted_url: String,
    pub original_format: &'static str,
    pub converted_format: String,
    pub file_size: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HtmlConversion {
    pub original_url: String,
    pub html_content: &'static str,
    pub file_size: &'static str,
    pub elements_found: u32,
}
