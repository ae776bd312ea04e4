//! N 子棋 AI 对局
//!
//! 用法: nrow-arena [设置文件路径]

mod arena;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::arena::Arena;
use crate::settings::MatchSettings;

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nrow_arena=info".parse()?)
                .add_directive("nrow_ai=info".parse()?),
        )
        .init();

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => MatchSettings::load_from(&path)?,
        None => MatchSettings::load(),
    };

    info!(
        "N 子棋对局开始: {}x{} 连 {}, X={:?}, O={:?}, 共 {} 局",
        settings.board_size,
        settings.board_size,
        settings.win_length,
        settings.x_player,
        settings.o_player,
        settings.games
    );

    let mut arena = Arena::new(settings)?;
    let (summary, records) = arena.run()?;

    for (index, record) in records.iter().enumerate() {
        let game = record
            .replay()
            .with_context(|| format!("第 {} 局棋谱重放失败", index + 1))?;
        println!("第 {} 局:\n{}", index + 1, game.board());

        if arena.settings().print_records {
            println!("{}", record.to_json()?);
        }
    }

    info!(
        "对局结束: X 胜 {}, O 胜 {}, 和 {}",
        summary.x_wins, summary.o_wins, summary.draws
    );

    Ok(())
}
