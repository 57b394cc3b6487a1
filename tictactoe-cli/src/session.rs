//! 人机对局循环

use std::future::Future;

use tictactoe_ai::AiEngine;
use tictactoe_core::{Game, GameError, GameStatus, Mark, Outcome};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::console::Console;
use crate::error::CliError;

/// 中断退出时的告别语
pub const FAREWELL: &str = "\nInterrupted by user. Exiting...";

/// 会话结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 对局正常结束
    Finished(Outcome),
    /// 用户中断或输入流结束
    Interrupted,
}

/// 终局提示语
pub fn outcome_message(outcome: Outcome, human: Mark) -> String {
    match outcome {
        Outcome::Won(mark) if mark == human => format!("You ({}) win!", mark),
        Outcome::Won(mark) => format!("AI ({}) wins!", mark),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}

/// 一局对弈会话
pub struct Session<R, W> {
    console: Console<R, W>,
    preferred_mark: Option<Mark>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// 创建会话，`preferred_mark` 非空时跳过先后手提示
    pub fn new(console: Console<R, W>, preferred_mark: Option<Mark>) -> Self {
        Self {
            console,
            preferred_mark,
        }
    }

    /// 取回控制台
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// 运行一局，`interrupt` 完成时立即结束并输出告别语
    pub async fn run<F>(&mut self, interrupt: F) -> Result<SessionOutcome, CliError>
    where
        F: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.play() => result,
            _ = interrupt => Err(CliError::Interrupted),
        };

        match result {
            Ok(outcome) => Ok(SessionOutcome::Finished(outcome)),
            Err(CliError::Interrupted | CliError::InputClosed) => {
                info!("对局被中断");
                self.console.say(FAREWELL).await?;
                Ok(SessionOutcome::Interrupted)
            }
            Err(e) => Err(e),
        }
    }

    async fn play(&mut self) -> Result<Outcome, CliError> {
        let human = match self.preferred_mark {
            Some(mark) => mark,
            None => self.console.choose_mark().await?,
        };
        let mut game = Game::new(human);
        let mut engine = AiEngine::for_mark(game.ai());
        info!(human = %human, ai = %game.ai(), "对局开始");

        loop {
            self.console.show_board(game.board()).await?;

            let outcome = match game.status() {
                GameStatus::Won(mark) => Outcome::Won(mark),
                GameStatus::Draw => Outcome::Draw,
                GameStatus::InProgress { to_move } if to_move == human => {
                    let pos = self.console.read_move(&game).await?;
                    game.play(pos)?;
                    continue;
                }
                GameStatus::InProgress { .. } => {
                    self.console
                        .say(&format!("AI ({}) is thinking...", game.ai()))
                        .await?;
                    let pos = engine
                        .best_move(game.board_mut())
                        .ok_or(GameError::GameOver)?;
                    game.play(pos)?;
                    continue;
                }
            };

            info!(?outcome, "对局结束");
            self.console.say(&outcome_message(outcome, human)).await?;
            return Ok(outcome);
        }
    }
}
