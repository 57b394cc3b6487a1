//! 对局控制
//!
//! 状态机: AwaitingMove -> (人类回合 | 电脑回合) -> {Won(O), Won(X), Draw}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Outcome};
use crate::error::{GameError, Result};
use crate::mark::{Mark, Position};

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中，等待 `to_move` 走子
    InProgress { to_move: Mark },
    /// 某方获胜
    Won(Mark),
    /// 和棋
    Draw,
}

/// 一局人机对弈
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Mark,
    ai: Mark,
}

impl Game {
    /// 创建新对局，电脑执人类的对方标记
    pub fn new(human: Mark) -> Self {
        Self {
            board: Board::empty(),
            human,
            ai: human.opponent(),
        }
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 供搜索使用的可变棋盘，调用方须在返回前复原
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// 人类标记
    pub fn human(&self) -> Mark {
        self.human
    }

    /// 电脑标记
    pub fn ai(&self) -> Mark {
        self.ai
    }

    /// 当前对局状态
    pub fn status(&self) -> GameStatus {
        match self.board.outcome() {
            Some(Outcome::Won(mark)) => GameStatus::Won(mark),
            Some(Outcome::Draw) => GameStatus::Draw,
            None => GameStatus::InProgress {
                to_move: self.board.turn(),
            },
        }
    }

    /// 是否轮到人类
    pub fn is_human_turn(&self) -> bool {
        self.status() == GameStatus::InProgress { to_move: self.human }
    }

    /// 为当前走子方落子，返回落子方
    pub fn play(&mut self, pos: Position) -> Result<Mark> {
        let GameStatus::InProgress { to_move } = self.status() else {
            return Err(GameError::GameOver);
        };
        self.board.place(pos, to_move)?;
        debug!(mark = %to_move, cell = pos.to_index(), "落子");
        Ok(to_move)
    }
}
