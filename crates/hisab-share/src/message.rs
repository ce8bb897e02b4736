//! Share message and link

use crate::archive::ExportArchive;

/// Build the pre-filled message describing an exported archive
pub fn compose_message(archive: &ExportArchive, project_url: &str) -> String {
    format!(
        "📊 Sharing my Hisab spreadsheet data!\n\n\
         File: {}\n\
         Size: {:.1} KB\n\
         Created: {}\n\n\
         Open the attached CSV file in any spreadsheet app.\n\n\
         🧮 Get Hisab Calculator: {}",
        archive.file_name,
        archive.size_kb(),
        archive.created.format("%Y-%m-%d %H:%M"),
        project_url,
    )
}

/// URL that opens the messaging endpoint with `message` pre-filled
pub fn share_url(endpoint: &str, message: &str) -> String {
    format!(
        "https://{}/send?text={}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(message)
    )
}
