//! ui::card
//!
//! Pure functions for rendering the SVG level card.
//!
//! # Design
//!
//! The card is a fixed 450x195 layout:
//! - Header with the user's name
//! - Large level number and the rank title
//! - Total bytes and bytes to the next level
//! - A progress bar through the current level
//!
//! Rendering takes immutable inputs, returns a string, and has no side
//! effects. User-controlled text (the name and the rank) is XML-escaped.

use crate::core::curve::level_floor;
use crate::core::types::UserStats;
use crate::ui::output::format_bytes;

/// Card width in pixels.
pub const CARD_WIDTH: u32 = 450;

/// Card height in pixels.
pub const CARD_HEIGHT: u32 = 195;

/// Width of the progress bar track.
const BAR_WIDTH: f64 = 400.0;

/// Escape text for use in SVG element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fraction of the current level already earned, in `[0, 1]`.
pub fn level_progress(stats: &UserStats) -> f64 {
    let floor = level_floor(stats.level);
    let ceiling = stats.total_bytes.saturating_add(stats.next_level_exp);
    let span = ceiling.saturating_sub(floor);
    if span == 0 {
        return 1.0;
    }
    let earned = stats.total_bytes.saturating_sub(floor);
    (earned as f64 / span as f64).clamp(0.0, 1.0)
}

/// Render the level card.
///
/// # Example
///
/// ```
/// use git_level::core::types::UserStats;
/// use git_level::ui::card::render_svg;
///
/// let stats = UserStats {
///     total_bytes: 8000,
///     level: 2,
///     rank: "Hello World Habitants".to_string(),
///     next_level_exp: 3000,
/// };
///
/// let svg = render_svg(&stats, "octocat");
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("octocat&apos;s Git Level"));
/// assert!(svg.contains("Lv. 2"));
/// ```
pub fn render_svg(stats: &UserStats, username: &str) -> String {
    let name = escape_xml(username);
    let rank = escape_xml(&stats.rank);
    let progress = level_progress(stats);
    let bar = (BAR_WIDTH * progress).round() as u32;
    let percent = (progress * 100.0).floor() as u32;
    let next_level = stats.level.saturating_add(1);

    let lines = [
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-labelledby="title">"#,
            w = CARD_WIDTH,
            h = CARD_HEIGHT
        ),
        format!(
            r#"  <title id="title">{}&apos;s Git Level: Lv. {} ({})</title>"#,
            name, stats.level, rank
        ),
        "  <style>".to_string(),
        "    .header { font: 600 18px 'Segoe UI', Ubuntu, sans-serif; fill: #c9d1d9; }".to_string(),
        "    .level { font: 700 36px 'Segoe UI', Ubuntu, sans-serif; fill: #58a6ff; }".to_string(),
        "    .rank { font: 600 14px 'Segoe UI', Ubuntu, sans-serif; fill: #f0883e; }".to_string(),
        "    .label { font: 400 13px 'Segoe UI', Ubuntu, sans-serif; fill: #8b949e; }".to_string(),
        "    .value { font: 600 13px 'Segoe UI', Ubuntu, sans-serif; fill: #c9d1d9; }".to_string(),
        "  </style>".to_string(),
        format!(
            r##"  <rect x="0.5" y="0.5" rx="6" width="{}" height="{}" fill="#0d1117" stroke="#30363d"/>"##,
            CARD_WIDTH - 1,
            CARD_HEIGHT - 1
        ),
        format!(
            r#"  <text x="25" y="38" class="header">{}&apos;s Git Level</text>"#,
            name
        ),
        format!(
            r#"  <text x="25" y="92" class="level">Lv. {}</text>"#,
            stats.level
        ),
        format!(r#"  <text x="25" y="118" class="rank">{}</text>"#, rank),
        r#"  <text x="250" y="78" class="label">Total Bytes</text>"#.to_string(),
        format!(
            r#"  <text x="425" y="78" class="value" text-anchor="end">{} B</text>"#,
            format_bytes(stats.total_bytes)
        ),
        r#"  <text x="250" y="104" class="label">Next Level</text>"#.to_string(),
        format!(
            r#"  <text x="425" y="104" class="value" text-anchor="end">{} B</text>"#,
            format_bytes(stats.next_level_exp)
        ),
        r##"  <rect x="25" y="145" width="400" height="10" rx="5" fill="#21262d"/>"##.to_string(),
        format!(
            r##"  <rect x="25" y="145" width="{}" height="10" rx="5" fill="#58a6ff"/>"##,
            bar
        ),
        format!(
            r#"  <text x="25" y="178" class="label">{}% to Lv. {}</text>"#,
            percent, next_level
        ),
        "</svg>".to_string(),
    ];

    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}
