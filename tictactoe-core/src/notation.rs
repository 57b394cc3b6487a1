//! 控制台输入解析
//!
//! - 先后手：`O`/`X`（不区分大小写）
//! - 走法：单个格子编号 0-8，row = n / 3, col = n % 3

use crate::constants::CELL_COUNT;
use crate::error::InputError;
use crate::mark::{Mark, Position};

/// 输入表示法
pub struct Notation;

impl Notation {
    /// 解析先后手选择
    pub fn parse_mark(input: &str) -> Result<Mark, InputError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(InputError::InvalidMarkChoice {
                input: trimmed.to_string(),
            }),
        }
    }

    /// 解析格子编号（不检查占用）
    pub fn parse_cell(input: &str) -> Result<Position, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber {
                input: trimmed.to_string(),
            });
        }
        // 全是数字但溢出 u64 时同样视为越界
        let index: u64 = trimmed.parse().unwrap_or(u64::MAX);
        if index >= CELL_COUNT as u64 {
            return Err(InputError::OutOfRange { index });
        }
        Position::from_index(index as usize).ok_or(InputError::OutOfRange { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark() {
        assert_eq!(Notation::parse_mark("O"), Ok(Mark::O));
        assert_eq!(Notation::parse_mark("o\n"), Ok(Mark::O));
        assert_eq!(Notation::parse_mark(" x "), Ok(Mark::X));

        for bad in ["", "0", "OX", "first", "y"] {
            assert!(
                matches!(
                    Notation::parse_mark(bad),
                    Err(InputError::InvalidMarkChoice { .. })
                ),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(Notation::parse_cell("0"), Ok(Position::new_unchecked(0, 0)));
        assert_eq!(Notation::parse_cell("5\n"), Ok(Position::new_unchecked(1, 2)));
        assert_eq!(Notation::parse_cell("8"), Ok(Position::new_unchecked(2, 2)));
    }

    #[test]
    fn test_parse_cell_errors() {
        assert_eq!(
            Notation::parse_cell("a"),
            Err(InputError::NotANumber { input: "a".into() })
        );
        assert_eq!(
            Notation::parse_cell("-1"),
            Err(InputError::NotANumber { input: "-1".into() })
        );
        assert!(matches!(
            Notation::parse_cell(""),
            Err(InputError::NotANumber { .. })
        ));
        assert_eq!(
            Notation::parse_cell("9"),
            Err(InputError::OutOfRange { index: 9 })
        );
        assert_eq!(
            Notation::parse_cell("99999999999999999999999"),
            Err(InputError::OutOfRange { index: u64::MAX })
        );
    }
}
