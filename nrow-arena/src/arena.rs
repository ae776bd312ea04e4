//! AI 对局
//!
//! 按设置连续进行多局 AI 对战，每局生成棋谱

use anyhow::{bail, Context, Result};
use nrow_ai::AiEngine;
use rules::{GameOutcome, GameRecord, GameState, Mark, MoveRecord, Player, PlayerKind};
use tracing::info;

use crate::settings::MatchSettings;

/// 比赛统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    /// 记录一局结果
    pub fn record(&mut self, outcome: &GameOutcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// 对局中的一方
struct Seat {
    player: Player,
    engine: AiEngine,
}

impl Seat {
    fn new(settings: &MatchSettings, kind: PlayerKind, mark: Mark, seed: u64) -> Result<Self> {
        let PlayerKind::Ai(difficulty) = kind else {
            bail!("{} 方是人类玩家，arena 只支持 AI 对局", mark);
        };

        Ok(Self {
            player: Player::ai(format!("AI-{}", difficulty), mark, difficulty),
            engine: AiEngine::with_seed(settings.ai_config(difficulty), seed),
        })
    }
}

/// 对局场
pub struct Arena {
    settings: MatchSettings,
    x: Seat,
    o: Seat,
}

impl Arena {
    /// 创建对局场，设置无效或有人类玩家时报错
    pub fn new(settings: MatchSettings) -> Result<Self> {
        settings.validate().context("对局设置无效")?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let x = Seat::new(&settings, settings.x_player, Mark::X, seed)?;
        let o = Seat::new(&settings, settings.o_player, Mark::O, seed.wrapping_add(1))?;

        Ok(Self { settings, x, o })
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// 进行一局，返回棋谱
    pub fn play_game(&mut self) -> Result<GameRecord> {
        let mut game = GameState::new(self.settings.board_size, self.settings.win_length)?;
        let mut record = GameRecord::new(
            self.x.player.clone(),
            self.o.player.clone(),
            self.settings.board_size,
            self.settings.win_length,
        );

        loop {
            let mark = game.current_turn();
            let seat = match mark {
                Mark::X => &mut self.x,
                Mark::O => &mut self.o,
            };

            let mv = seat.engine.choose_for(&mut game)?;
            record.add_move(MoveRecord::with_nodes(mv, mark, seat.engine.nodes_searched()));

            if let Some(outcome) = game.apply_move(mv)? {
                record.set_result(outcome);
                return Ok(record);
            }
        }
    }

    /// 按设置进行全部对局
    pub fn run(&mut self) -> Result<(MatchSummary, Vec<GameRecord>)> {
        let mut summary = MatchSummary::default();
        let mut records = Vec::new();

        for index in 0..self.settings.games {
            let record = self
                .play_game()
                .with_context(|| format!("第 {} 局出错", index + 1))?;

            if let Some(outcome) = &record.metadata.result {
                summary.record(outcome);
                info!(
                    "第 {} 局: {}, 共 {} 步",
                    index + 1,
                    describe(outcome),
                    record.moves.len()
                );
            }
            records.push(record);
        }

        Ok((summary, records))
    }
}

/// 结果描述
pub fn describe(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Win { mark, line } => {
            let cells: Vec<String> = line.iter().map(|mv| mv.to_string()).collect();
            format!("{} 胜 [{}]", mark, cells.join(" "))
        }
        GameOutcome::Draw => "和棋".to_string(),
    }
}
