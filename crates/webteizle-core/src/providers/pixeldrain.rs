//! PixelDrain resolver
//!
//! The download API URL is derived from the file id; nothing is fetched.

use super::{ExtractedStream, not_found};
use crate::error::Result;
use crate::parser::patterns::pixeldrain_file_id;

pub fn download_url(file_id: &str) -> String {
    format!("https://pixeldrain.com/api/file/{}?download", file_id)
}

pub(super) fn resolve(embed_url: &str) -> Result<ExtractedStream> {
    let file_id = pixeldrain_file_id(embed_url).ok_or_else(|| not_found("pixeldrain file id"))?;
    ExtractedStream::new(&download_url(&file_id), &[])
}
