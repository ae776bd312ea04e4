//! 对局设置
//!
//! 设置数据结构与 JSON 持久化

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nrow_ai::{AiConfig, DEFAULT_LARGE_BOARD_DEPTH_CAP};
use rules::{Difficulty, PlayerKind, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
use serde::{Deserialize, Serialize};

/// 单次运行的最大对局数
pub const MAX_GAMES: u32 = 10_000;

/// 对局设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// 棋盘边长（3-8）
    pub board_size: u8,
    /// 连子长度（3-边长）
    pub win_length: u8,
    /// 执 X 的玩家
    pub x_player: PlayerKind,
    /// 执 O 的玩家
    pub o_player: PlayerKind,
    /// 对局数
    pub games: u32,
    /// 随机种子，不设置时每次运行结果不同
    pub seed: Option<u64>,
    /// 大棋盘搜索深度上限
    pub large_board_depth_cap: u32,
    /// 输出每局的 JSON 棋谱
    pub print_records: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            x_player: PlayerKind::Ai(Difficulty::VeryHard),
            o_player: PlayerKind::Ai(Difficulty::Hard),
            games: 1,
            seed: None,
            large_board_depth_cap: DEFAULT_LARGE_BOARD_DEPTH_CAP,
            print_records: false,
        }
    }
}

impl MatchSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("nrow");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 检查棋盘参数与对局数
    pub fn validate(&self) -> Result<()> {
        rules::new_game(self.board_size, self.win_length)?;
        anyhow::ensure!(
            (1..=MAX_GAMES).contains(&self.games),
            "对局数 {} 超出范围 1..={}",
            self.games,
            MAX_GAMES
        );
        Ok(())
    }

    /// 指定难度的 AI 配置
    pub fn ai_config(&self, difficulty: Difficulty) -> AiConfig {
        AiConfig::from_difficulty(difficulty).with_large_board_depth_cap(self.large_board_depth_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::GameError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = MatchSettings::default();
        assert_eq!(settings.board_size, 3);
        assert_eq!(settings.win_length, 3);
        assert_eq!(settings.x_player, PlayerKind::Ai(Difficulty::VeryHard));
        assert_eq!(settings.o_player, PlayerKind::Ai(Difficulty::Hard));
        assert_eq!(settings.games, 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let settings = MatchSettings {
            board_size: 6,
            win_length: 4,
            x_player: PlayerKind::Ai(Difficulty::Easy),
            seed: Some(99),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = MatchSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"board_size": 5, "o_player": "human"}"#).unwrap();

        let loaded = MatchSettings::load_from(&path).unwrap();
        assert_eq!(loaded.board_size, 5);
        assert_eq!(loaded.o_player, PlayerKind::Human);
        assert_eq!(loaded.win_length, DEFAULT_WIN_LENGTH);
        assert_eq!(loaded.x_player, PlayerKind::Ai(Difficulty::VeryHard));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(MatchSettings::load_from(&missing).is_err());

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = MatchSettings::load_from(&broken).unwrap_err();
        assert!(err.to_string().contains("设置文件格式无效"));
    }

    #[test]
    fn test_validate() {
        let settings = MatchSettings {
            board_size: 9,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::InvalidBoardSize { .. })
        ));

        let settings = MatchSettings {
            board_size: 4,
            win_length: 5,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.downcast_ref::<GameError>().is_some_and(GameError::is_configuration));

        for games in [0, MAX_GAMES + 1, u32::MAX] {
            let settings = MatchSettings {
                games,
                ..Default::default()
            };
            assert!(settings.validate().unwrap_err().to_string().contains("对局数"));
        }
        let settings = MatchSettings {
            games: MAX_GAMES,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_ai_config_uses_depth_cap() {
        let settings = MatchSettings {
            large_board_depth_cap: 3,
            ..Default::default()
        };
        let config = settings.ai_config(Difficulty::Hard);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.depth_cap(7), 3);
    }
}
