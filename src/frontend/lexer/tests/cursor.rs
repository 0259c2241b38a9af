//! Cursor tests - backtracking, lookahead, history

use crate::frontend::lexer::cursor::Cursor;
use proptest::prelude::*;

#[cfg(test)]
mod lexer_cursor_tests {
    use super::*;

    #[test]
    fn test_next_and_current() {
        let mut c = Cursor::new("ab".to_string());
        assert_eq!(c.next(), Some('a'));
        assert_eq!(c.next(), Some('b'));
        assert_eq!(c.next(), None);
        assert_eq!(c.current(), "ab");
    }

    #[test]
    fn test_next_past_end_is_stable() {
        let mut c = Cursor::new("a".to_string());
        c.next();
        assert_eq!(c.next(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.position().offset, 1);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut c = Cursor::new("xyz".to_string());
        for _ in 0..5 {
            assert_eq!(c.peek(), Some('x'));
        }
        assert_eq!(c.position().offset, 0);
        assert_eq!(c.next(), Some('x'));
    }

    #[test]
    fn test_peek_n() {
        let mut c = Cursor::new("abc".to_string());
        assert_eq!(c.peek_n(1), Some('a'));
        assert_eq!(c.peek_n(2), Some('b'));
        assert_eq!(c.peek_n(3), Some('c'));
        assert_eq!(c.peek_n(4), None);
        assert_eq!(c.position().offset, 0);
    }

    #[test]
    fn test_rewind_restores_multibyte_width() {
        let mut c = Cursor::new("aβc".to_string());
        c.next();
        assert_eq!(c.next(), Some('β'));
        assert_eq!(c.position().offset, 3);
        c.rewind();
        assert_eq!(c.position().offset, 1);
        assert_eq!(c.next(), Some('β'));
    }

    #[test]
    fn test_rewind_on_empty_history_is_noop() {
        let mut c = Cursor::new("ab".to_string());
        c.rewind();
        assert_eq!(c.position().offset, 0);
        assert_eq!(c.next(), Some('a'));
    }

    #[test]
    fn test_rewind_is_clamped_at_lexeme_start() {
        // Ignore clears the history, so the consumed prefix can never be
        // rewound back into the new lexeme.
        let mut c = Cursor::new("ab".to_string());
        c.next();
        c.ignore();
        c.rewind();
        assert_eq!(c.position().offset, 1);
        assert_eq!(c.current(), "");
    }

    #[test]
    fn test_rewind_at_end_of_input() {
        let mut c = Cursor::new("a".to_string());
        c.next();
        c.next(); // sentinel, zero width
        c.rewind(); // pops the sentinel, no movement
        assert_eq!(c.position().offset, 1);
        c.rewind();
        assert_eq!(c.position().offset, 0);
    }

    #[test]
    fn test_accept() {
        let mut c = Cursor::new("ba".to_string());
        assert!(c.accept("ab"));
        assert!(c.accept("ab"));
        assert!(!c.accept("ab"));
        assert_eq!(c.current(), "ba");
    }

    #[test]
    fn test_accept_rejects_and_rewinds() {
        let mut c = Cursor::new("z".to_string());
        assert!(!c.accept("ab"));
        assert_eq!(c.position().offset, 0);
    }

    #[test]
    fn test_accept_at_end_of_input() {
        let mut c = Cursor::new(String::new());
        assert!(!c.accept("abc"));
        assert_eq!(c.position().offset, 0);
    }

    #[test]
    fn test_accept_run() {
        let mut c = Cursor::new("0017x".to_string());
        c.accept_run("01234567");
        assert_eq!(c.current(), "0017");
        assert_eq!(c.next(), Some('x'));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut c = Cursor::new("a\nb".to_string());
        assert_eq!((c.position().line, c.position().column), (1, 1));
        c.next();
        assert_eq!((c.position().line, c.position().column), (1, 2));
        c.next();
        assert_eq!((c.position().line, c.position().column), (2, 1));
        c.next();
        assert_eq!((c.position().line, c.position().column), (2, 2));
    }

    #[test]
    fn test_rewind_restores_line_and_column() {
        let mut c = Cursor::new("a\nb".to_string());
        c.next();
        c.next();
        c.next();
        c.rewind();
        assert_eq!((c.position().line, c.position().column), (2, 1));
        c.rewind();
        assert_eq!((c.position().line, c.position().column), (1, 2));
    }

    #[test]
    fn test_ignore_starts_fresh_lexeme() {
        let mut c = Cursor::new("ab cd".to_string());
        c.next();
        c.next();
        c.ignore();
        assert_eq!(c.current(), "");
        c.next();
        assert_eq!(c.current(), " ");
        assert_eq!(c.start_position().offset, 2);
    }
}

proptest! {
    #[test]
    fn prop_peek_n_is_side_effect_free(src in ".{0,24}", n in 1usize..8) {
        let mut c = Cursor::new(src);
        c.next();
        let before = c.position();
        c.peek_n(n);
        prop_assert_eq!(c.position(), before);
    }

    #[test]
    fn prop_peek_n_sees_what_next_returns(src in ".{0,24}", n in 1usize..8) {
        let mut c = Cursor::new(src);
        let expected = c.peek_n(n);
        let mut last = None;
        for _ in 0..n {
            last = c.next();
        }
        prop_assert_eq!(last, expected);
    }

    #[test]
    fn prop_full_rewind_returns_to_start(src in ".{0,24}") {
        let mut c = Cursor::new(src);
        let mut steps = 0;
        while c.next().is_some() {
            steps += 1;
        }
        c.rewind(); // sentinel
        for _ in 0..steps {
            c.rewind();
        }
        prop_assert_eq!(c.position().offset, 0);
        prop_assert_eq!((c.position().line, c.position().column), (1, 1));
    }
}
