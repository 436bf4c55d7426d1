use crate::common::encode_component;
use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{HtmlConversion, ImageConversion, PdfExtraction};

const DEMO_HTML: &str = "<!DOCTYPE html><html><head><title>Converted Content</title></head><body><h1>Demo HTML Content</h1><p>This would contain the actual converted HTML content.</p></body></html>";

pub async fn pdf_extract(params: Params) -> ApiReply<PdfExtraction> {
    let url = params.require("url", "PDF URL is required")?;

    Ok(success_to_api_response(
        PdfExtraction {
            url: url.to_string(),
            text: "This is demo extracted text from the PDF. In production, this would contain actual PDF content.",
            pages: 10,
            file_size: "2.5MB",
            extraction_method: "demo",
        },
        "PDF text extraction completed",
    ))
}

pub async fn convert_image(params: Params) -> ApiReply<ImageConversion> {
    let url = params.require("url", "Image URL is required")?;
    let format = params.get_or("format", "png");

    Ok(success_to_api_response(
        ImageConversion {
            original_url: url.to_string(),
            converted_url: format!(
                "https://picsum.photos/500/500?text={}+Converted",
                encode_component(format)
            ),
            original_format: "jpg",
            converted_format: format.to_string(),
            file_size: "500KB",
        },
        "Image conversion completed",
    ))
}

pub async fn convert_html(params: Params) -> ApiReply<HtmlConversion> {
    let url = params.require("url", "URL is required")?;

    Ok(success_to_api_response(
        HtmlConversion {
            original_url: url.to_string(),
            html_content: DEMO_HTML,
            file_size: "2.1KB",
            elements_found: 25,
        },
        "HTML conversion completed",
    ))
}
