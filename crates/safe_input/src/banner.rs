//! Fixed-width asterisk banners.

use unicode_width::UnicodeWidthStr;

/// Total width of a banner line.
pub const HEADER_WIDTH: usize = 60;

/// Border printed on each side of the message line.
const BORDER: &str = "***";

/// Builds a 3-line banner with `msg` centered between `***` borders.
///
/// The odd padding column goes to the right. A message wider than the
/// inner area is printed unpadded and overflows the box.
pub fn pretty_header(msg: &str) -> String {
    let rule = "*".repeat(HEADER_WIDTH);
    let available = HEADER_WIDTH - 2 * BORDER.len();
    let total_padding = available.saturating_sub(msg.width());
    let left = total_padding / 2;
    let right = total_padding - left;

    format!(
        "{rule}\n{BORDER}{}{msg}{}{BORDER}\n{rule}\n",
        " ".repeat(left),
        " ".repeat(right),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_banner_shape() {
        let banner = pretty_header("WIN");
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "*".repeat(60));
        assert_eq!(lines[2], "*".repeat(60));
        assert_eq!(lines[1].len(), 60);
        assert!(lines[1].starts_with("***"));
        assert!(lines[1].ends_with("***"));
        assert_eq!(lines[1].trim_matches('*').trim(), "WIN");
    }

    #[test]
    fn test_odd_remainder_goes_right() {
        // 54 - 3 = 51: 25 left, 26 right.
        let banner = pretty_header("WIN");
        let middle = banner.lines().nth(1).unwrap();
        let expected = format!("***{}WIN{}***", " ".repeat(25), " ".repeat(26));
        assert_eq!(middle, expected);
    }

    #[test]
    fn test_even_padding_is_symmetric() {
        let middle = pretty_header("TIED").lines().nth(1).unwrap().to_string();
        let expected = format!("***{}TIED{}***", " ".repeat(25), " ".repeat(25));
        assert_eq!(middle, expected);
    }

    #[test]
    fn test_overlong_message_overflows() {
        let msg = "x".repeat(70);
        let middle = pretty_header(&msg).lines().nth(1).unwrap().to_string();
        assert_eq!(middle, format!("***{}***", msg));
    }
}
