//! Reducer-backed state for the two widgets.
//! Each widget owns its own reducer; nothing is shared between them.

use std::rc::Rc;
use yew::Reducible;

use crate::config::{MiningConfig, TickerConfig};
use crate::state::{BalanceTicker, MiningSession};

#[derive(Clone, Debug, PartialEq)]
pub struct TickerState {
    pub config: TickerConfig,
    pub ticker: BalanceTicker,
}

impl TickerState {
    pub fn new(config: TickerConfig) -> Self {
        Self { config, ticker: BalanceTicker::default() }
    }
}

#[derive(Clone, Debug)]
pub enum TickerAction {
    Tick, // once per tick_interval_ms
}

impl Reducible for TickerState {
    type Action = TickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TickerAction::Tick => {
                let mut new = (*self).clone();
                new.ticker = new.ticker.tick(new.config.rate);
                Rc::new(new)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MiningState {
    pub config: MiningConfig,
    pub session: MiningSession,
}

impl MiningState {
    pub fn new(config: MiningConfig) -> Self {
        Self { config, session: MiningSession::default() }
    }
}

#[derive(Clone, Debug)]
pub enum MiningAction {
    Start,
    /// `roll` in [0, 1) picks the reward if this tick completes the session.
    Tick { roll: f64 },
}

impl Reducible for MiningState {
    type Action = MiningAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MiningAction::*;
        // Ignored actions hand back the same Rc so yew skips the re-render
        match action {
            Start if self.session.running => self,
            Tick { .. } if !self.session.running => self,
            Start => {
                let mut new = (*self).clone();
                new.session = new.session.start();
                Rc::new(new)
            }
            Tick { roll } => {
                let mut new = (*self).clone();
                new.session = new.session.tick(&new.config, roll);
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MiningStatus;

    #[test]
    fn ticker_reducer_accumulates() {
        let mut s = Rc::new(TickerState::new(TickerConfig::default()));
        for _ in 0..3 {
            s = s.reduce(TickerAction::Tick);
        }
        assert_eq!(s.ticker.ticks, 3);
        assert!((s.ticker.balance - 0.000003).abs() < 1e-15);
    }

    #[test]
    fn ignored_actions_return_same_state() {
        let idle = Rc::new(MiningState::new(MiningConfig::default()));
        let after = idle.clone().reduce(MiningAction::Tick { roll: 0.2 });
        assert!(Rc::ptr_eq(&idle, &after));

        let running = idle.reduce(MiningAction::Start);
        let again = running.clone().reduce(MiningAction::Start);
        assert!(Rc::ptr_eq(&running, &again));
    }

    #[test]
    fn mining_reducer_runs_full_session() {
        let mut s = Rc::new(MiningState::new(MiningConfig::default())).reduce(MiningAction::Start);
        for _ in 0..50 {
            s = s.reduce(MiningAction::Tick { roll: 0.9 });
        }
        assert_eq!(s.session.progress, 100);
        assert_eq!(s.session.status, MiningStatus::Complete);
        assert!(!s.session.running);
        // late tick from an interval that has not been dropped yet
        let late = s.clone().reduce(MiningAction::Tick { roll: 0.9 });
        assert_eq!(late.session.sessions_completed, 1);
    }
}
