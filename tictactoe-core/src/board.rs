//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, ROW_SEPARATOR, WIN_LINES};
use crate::error::{GameError, Result};
use crate::mark::{Mark, Position};

/// 终局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方连成一线
    Won(Mark),
    /// 满盘和棋
    Draw,
}

/// 棋盘
///
/// 3x3 格子，索引为 row * 3 + col。整局只创建一次，搜索时原地试走并复原，
/// 不做拷贝。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从布局字符串创建棋盘
    ///
    /// `X`/`O` 表示棋子（不区分大小写），`_` 或 `.` 表示空格，`/` 和空白忽略。
    /// 必须恰好给出 9 个格子。
    pub fn from_layout(layout: &str) -> Option<Self> {
        let mut board = Self::empty();
        let mut index = 0;
        for c in layout.chars() {
            if c == '/' || c.is_whitespace() {
                continue;
            }
            if index >= CELL_COUNT {
                return None;
            }
            board.cells[index] = match c {
                '_' | '.' => None,
                other => Some(Mark::from_char(other)?),
            };
            index += 1;
        }
        (index == CELL_COUNT).then_some(board)
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.to_index()).copied().flatten()
    }

    /// 指定位置是否为空
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// 落子（检查占用）
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<()> {
        let index = pos.to_index();
        if self.cells[index].is_some() {
            return Err(GameError::Occupied { index });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// 试走：落子并返回守卫，守卫析构时清空该格
    ///
    /// 调用方须保证该格为空。守卫解引用为棋盘本身，可直接递归搜索。
    pub fn speculate(&mut self, pos: Position, mark: Mark) -> Speculation<'_> {
        debug_assert!(self.is_empty_at(pos), "speculate on occupied cell {}", pos);
        self.cells[pos.to_index()] = Some(mark);
        Speculation {
            board: self,
            position: pos,
        }
    }

    /// 所有空格（行优先顺序）
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty_at(pos)).collect()
    }

    /// 统计某方棋子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// 是否满盘
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 指定方是否在任一行、列或对角线上连成三子
    pub fn has_won(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.cells[index] == Some(mark)))
    }

    /// 终局判定：先查 X 胜，再查 O 胜，最后查满盘
    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_won(Mark::X) {
            Some(Outcome::Won(Mark::X))
        } else if self.has_won(Mark::O) {
            Some(Outcome::Won(Mark::O))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// 当前轮到哪方：O 子数不多于 X 子数时 O 走，否则 X 走
    pub fn turn(&self) -> Mark {
        if self.count(Mark::O) <= self.count(Mark::X) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// 渲染棋盘，`show_indices` 为真时空格显示其编号
    pub fn render(&self, show_indices: bool) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| {
                        let index = row * BOARD_SIZE + col;
                        match self.cells[index] {
                            Some(mark) => mark.to_string(),
                            None if show_indices => index.to_string(),
                            None => " ".to_string(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();
        rows.join(&format!("\n{}\n", ROW_SEPARATOR))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

/// 试走守卫
///
/// 持有棋盘的可变借用，析构时把试走的格子恢复为空，
/// 因此无论以何种方式离开作用域，棋盘都会复原。
pub struct Speculation<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Speculation<'_> {
    /// 试走的位置
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.to_index()] = None;
    }
}
