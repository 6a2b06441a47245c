// Simulated mining session: Idle <-> Mining, one reward per completed session
use crate::config::MiningConfig;
use crate::util::round_to;

pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MiningStatus {
    #[default]
    Ready,
    Mining,
    Complete,
}

impl MiningStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MiningStatus::Ready => "Ready to mine",
            MiningStatus::Mining => "Mining...",
            MiningStatus::Complete => "Mining complete!",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MiningSession {
    pub running: bool,
    /// Percentage, 0..=100.
    pub progress: u8,
    /// Sum of all rewards, rounded to 4 decimals after each completion.
    pub mined_total: f64,
    pub status: MiningStatus,
    pub last_reward: Option<f64>,
    pub sessions_completed: u32,
}

impl MiningSession {
    /// Idle -> Mining. No-op while already running.
    pub fn start(self) -> Self {
        if self.running {
            return self;
        }
        Self {
            running: true,
            progress: 0,
            status: MiningStatus::Mining,
            ..self
        }
    }

    /// Advances progress by one step; on reaching 100 pays out the reward for `roll`
    /// and returns to Idle. Ticks while idle are ignored.
    pub fn tick(self, cfg: &MiningConfig, roll: f64) -> Self {
        if !self.running {
            return self;
        }
        let progress = self.progress.saturating_add(cfg.progress_step).min(PROGRESS_COMPLETE);
        if progress < PROGRESS_COMPLETE {
            return Self { progress, ..self };
        }
        let reward = cfg.reward_for(roll);
        Self {
            running: false,
            progress,
            mined_total: round_to(self.mined_total + reward, 4),
            status: MiningStatus::Complete,
            last_reward: Some(reward),
            sessions_completed: self.sessions_completed.saturating_add(1),
        }
    }
}
