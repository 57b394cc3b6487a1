//! 控制台交互
//!
//! 读写端均为泛型，二进制中接 stdin/stdout，测试中接内存缓冲区。
//! 无效输入一律重新提示，没有次数上限。

use tictactoe_core::{Board, Game, Mark, Notation, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::CliError;

/// 先后手提示
pub const CHOOSE_PROMPT: &str = "Do you want to go first (O) or second (X)? ";

/// 先后手无效提示
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter O or X.";

/// 走法无效提示
pub const INVALID_MOVE: &str = "Invalid move. Try again.";

/// 控制台
pub struct Console<R, W> {
    reader: R,
    writer: W,
    show_cell_indices: bool,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// 创建控制台
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            show_cell_indices: true,
        }
    }

    /// 设置空格是否显示编号
    pub fn with_cell_indices(mut self, show: bool) -> Self {
        self.show_cell_indices = show;
        self
    }

    /// 取回写端
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// 输出一行
    pub async fn say(&mut self, text: &str) -> Result<(), CliError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// 显示棋盘
    pub async fn show_board(&mut self, board: &Board) -> Result<(), CliError> {
        let rendered = board.render(self.show_cell_indices);
        self.say(&rendered).await
    }

    /// 输出提示并读取一行，输入流结束时返回 `InputClosed`
    async fn prompt(&mut self, text: &str) -> Result<String, CliError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line)
    }

    /// 询问人类执哪方
    pub async fn choose_mark(&mut self) -> Result<Mark, CliError> {
        loop {
            let line = self.prompt(CHOOSE_PROMPT).await?;
            match Notation::parse_mark(&line) {
                Ok(mark) => return Ok(mark),
                Err(e) => {
                    debug!("先后手输入无效: {}", e);
                    self.say(INVALID_CHOICE).await?;
                }
            }
        }
    }

    /// 读取人类走法，直到给出空格编号
    pub async fn read_move(&mut self, game: &Game) -> Result<Position, CliError> {
        let prompt = format!("Player {}, enter your move (0-8): ", game.human());
        loop {
            let line = self.prompt(&prompt).await?;
            match Notation::parse_cell(&line) {
                Ok(pos) if game.board().is_empty_at(pos) => return Ok(pos),
                Ok(pos) => debug!("格子 {} 已被占用", pos.to_index()),
                Err(e) => debug!("走法输入无效: {}", e),
            }
            self.say(INVALID_MOVE).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[tokio::test]
    async fn test_choose_mark_reprompts() {
        let mut c = console("first\n\nx\n");
        assert_eq!(c.choose_mark().await.unwrap(), Mark::X);

        let out = output(c);
        assert_eq!(out.matches(CHOOSE_PROMPT).count(), 3);
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
    }

    #[tokio::test]
    async fn test_choose_mark_input_closed() {
        let mut c = console("maybe\n");
        assert!(matches!(c.choose_mark().await, Err(CliError::InputClosed)));
    }

    #[tokio::test]
    async fn test_read_move_validates() {
        let mut game = Game::new(Mark::O);
        game.play(Position::from_index(4).unwrap()).unwrap();
        game.play(Position::from_index(0).unwrap()).unwrap();

        // 非数字、越界、已占用，最后给出合法格子
        let mut c = console("abc\n12\n4\n0\n7\n");
        let pos = c.read_move(&game).await.unwrap();
        assert_eq!(pos.to_index(), 7);

        let out = output(c);
        assert_eq!(out.matches("Player O, enter your move (0-8): ").count(), 5);
        assert_eq!(out.matches(INVALID_MOVE).count(), 4);
    }

    #[tokio::test]
    async fn test_show_board() {
        let mut game = Game::new(Mark::O);
        game.play(Position::from_index(4).unwrap()).unwrap();

        let mut c = console("");
        c.show_board(game.board()).await.unwrap();
        assert_eq!(output(c), "0 | 1 | 2\n--+---+--\n3 | O | 5\n--+---+--\n6 | 7 | 8\n");
    }
}
