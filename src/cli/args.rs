// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliBound, CliNumberKind, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "numrange",
    version = crate::VERSION,
    about = "数値列の最小値・最大値を一度の走査で求めるツール"
)]
pub struct Args {
    /// 入力ファイル（省略時または `-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// 入力値の型
    #[arg(long, value_enum, default_value = "int", help_heading = "入力")]
    pub kind: CliNumberKind,

    /// 解析できないトークンと数値を含まない入力を警告付きで読み飛ばす
    #[arg(long, help_heading = "入力")]
    pub lenient: bool,

    /// 出力する値（範囲 / 最小値のみ / 最大値のみ）
    #[arg(long, value_enum, default_value = "range", help_heading = "出力")]
    pub bound: CliBound,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 入力ごとの結果を全体の結果の前に表示
    #[arg(long, help_heading = "出力")]
    pub per_file: bool,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
