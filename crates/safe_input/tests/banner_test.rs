//! Banner layout through the public API.

use safe_input::{HEADER_WIDTH, SafeInput, pretty_header};
use std::io::Cursor;

#[test]
fn test_banner_lines_are_sixty_wide() {
    for msg in ["WIN", "Welcome to Tic Tac Toe!", "It's a TIE! Good game!", ""] {
        let banner = pretty_header(msg);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3, "banner for {:?}", msg);
        for line in &lines {
            assert_eq!(line.chars().count(), HEADER_WIDTH, "line {:?}", line);
        }
        assert!(lines[1].starts_with("***") && lines[1].ends_with("***"));
    }
}

#[test]
fn test_welcome_banner_exact() {
    // 54 - 23 = 31: 15 left, 16 right.
    let expected = format!(
        "{stars}\n***{}Welcome to Tic Tac Toe!{}***\n{stars}\n",
        " ".repeat(15),
        " ".repeat(16),
        stars = "*".repeat(60),
    );
    assert_eq!(pretty_header("Welcome to Tic Tac Toe!"), expected);
}

#[test]
fn test_wide_characters_use_display_width() {
    // Each CJK character occupies two columns.
    let banner = pretty_header("勝ち");
    let middle = banner.lines().nth(1).unwrap();
    assert_eq!(middle, format!("***{}勝ち{}***", " ".repeat(25), " ".repeat(25)));
}

#[test]
fn test_provider_writes_banner() {
    let mut input = SafeInput::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
    input.banner("WIN").unwrap();
    let (_, out) = input.into_inner();
    assert_eq!(String::from_utf8(out).unwrap(), pretty_header("WIN"));
}
