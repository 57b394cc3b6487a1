//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 全部 8 条连线（3 行、3 列、主对角线、副对角线），元素为扁平索引
pub const WIN_LINES: [[usize; BOARD_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 行分隔线
pub const ROW_SEPARATOR: &str = "--+---+--";
