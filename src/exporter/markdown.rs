use crate::exporter::record::RipRecord;

const CRLF: &str = "\r\n";

/// Lower-cases a game name and strips the characters that broke the
/// published site's paths. Backslashes, quotes, angle brackets and pipes are
/// left alone.
pub fn sanitize_name(game_name: &str) -> String {
    game_name
        .to_lowercase()
        .replace(' ', "-")
        .replace('/', "-")
        .replace('*', "")
        .replace(':', "")
        .replace('?', "")
}

/// `{identifier}-{sanitized name}`, shared by the page file and its index link.
pub fn page_stem(record: &RipRecord) -> String {
    format!("{}-{}", record.identifier, sanitize_name(&record.game_name))
}

pub fn index_line(record: &RipRecord, link_extension: &str) -> String {
    format!(
        "- [{}]({}.{}){}",
        record.game_name,
        page_stem(record),
        link_extension,
        CRLF
    )
}

pub fn render_page(record: &RipRecord) -> String {
    let lines = [
        format!("# {}", record.game_name),
        String::new(),
        "## Rip Details".to_string(),
        String::new(),
        format!("- **User:** {}", record.user_name),
        format!("- **Date:** {}", record.date),
        format!("- **Status:** {}", record.status),
        String::new(),
        "## Downsampling".to_string(),
        String::new(),
        record.downsample.clone(),
        String::new(),
        "## Bin Hacking".to_string(),
        String::new(),
        record.binhack.clone(),
        String::new(),
        "## Comments".to_string(),
        String::new(),
        record.comments.clone(),
        String::new(),
    ];

    let mut page = lines.join(CRLF);
    page.push_str(CRLF);
    page
}
