//! Game session management.
//!
//! `Session` owns the live town, carries the hunter from town to town, keeps
//! each town's treasure and search state, and stops for good once the hunter
//! wins, loses, or quits.

use serde::{Deserialize, Serialize};
use th_core::{Hunter, Roller, Shop, Treasure};
use tracing::{debug, info};

use crate::action::Action;
use crate::config::GameConfig;
use crate::error::{SessionError, SessionResult};
use crate::preset::{Preset, PresetRules};
use crate::town::Town;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Accepting actions.
    Playing,
    /// The hunter collected the full treasure set.
    Won,
    /// A brawl ruined the hunter.
    Lost,
    /// The player gave up.
    Quit,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// An interactive treasure hunt.
pub struct Session<R: Roller> {
    preset: Preset,
    rules: PresetRules,
    town: Town,
    treasure: Treasure,
    searched: bool,
    state: SessionState,
    towns_visited: u32,
    last_report: String,
    roller: R,
}

impl<R: Roller> Session<R> {
    /// Start a session in its first town.
    pub fn start(config: &GameConfig, mut roller: R) -> Self {
        let rules = config.preset.rules();
        let hunter = Hunter::new(&config.hunter_name, rules.starting_gold)
            .with_kit(rules.starting_kit.iter().copied());
        let (town, treasure) = enter_town(&rules, hunter, &mut roller);
        info!(preset = %config.preset, hunter = %config.hunter_name, "session started");

        let last_report = town.latest_news().to_string();
        Self {
            preset: config.preset,
            rules,
            town,
            treasure,
            searched: false,
            state: SessionState::Playing,
            towns_visited: 1,
            last_report,
            roller,
        }
    }

    /// The difficulty preset.
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// The current town.
    pub fn town(&self) -> &Town {
        &self.town
    }

    /// The hunter, who is always in the current town.
    pub fn hunter(&self) -> Option<&Hunter> {
        self.town.hunter()
    }

    /// The treasure hidden in the current town.
    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    /// Whether the current town was already searched.
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// The session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.state != SessionState::Playing
    }

    /// How many towns the hunter has entered, the first included.
    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// The text produced by the most recent successful action.
    pub fn last_report(&self) -> &str {
        &self.last_report
    }

    /// Hunter, treasure, and town summary shown before each prompt.
    pub fn status(&self) -> String {
        let mut out = String::new();
        if let Some(hunter) = self.hunter() {
            out.push_str(&hunter.info());
            out.push('\n');
            out.push_str(&hunter.treasure_info());
            out.push('\n');
        }
        out.push_str(&self.town.info());
        out
    }

    /// Process a line of input and return what to show the player.
    ///
    /// Unknown tokens and actions after the game ended are errors that
    /// leave the session untouched.
    pub fn dispatch(&mut self, input: &str) -> SessionResult<String> {
        if self.is_over() {
            return Err(SessionError::Finished(self.state));
        }
        let action = Action::parse(input)
            .ok_or_else(|| SessionError::InvalidChoice(input.trim().to_string()))?;
        debug!(?action, "dispatch");

        let report = match action {
            Action::Shop(request) => self.town.enter_shop(&request)?.to_string(),
            Action::Explore => self.town.terrain().info(),
            Action::Move => self.travel()?,
            Action::LookForTrouble => {
                self.town.look_for_trouble(&mut self.roller)?;
                self.town.latest_news().to_string()
            }
            Action::Hunt => self.search_for_treasure()?,
            Action::Dig => self.town.dig_for_gold(&mut self.roller)?.to_string(),
            Action::Quit => {
                self.state = SessionState::Quit;
                let name = self.hunter().map_or("hunter", |h| h.name());
                format!("Fare thee well, {name}!")
            }
        };

        if self.town.lost() && self.state == SessionState::Playing {
            self.state = SessionState::Lost;
            info!(towns = self.towns_visited, "hunter ruined");
        }
        self.last_report.clone_from(&report);
        Ok(report)
    }

    /// Try to move on. A blocked crossing changes nothing.
    pub fn travel(&mut self) -> SessionResult<String> {
        let crossing = self.town.leave_town(&mut self.roller)?;
        if !crossing.crossed() {
            return Ok(self.town.latest_news().to_string());
        }

        // The old town's news goes out before the town does.
        let farewell = self.town.latest_news().to_string();
        let hunter = self.town.depart()?;
        let (town, treasure) = enter_town(&self.rules, hunter, &mut self.roller);
        self.town = town;
        self.treasure = treasure;
        self.searched = false;
        self.towns_visited += 1;
        info!(towns = self.towns_visited, terrain = %self.town.terrain(), "entered new town");

        Ok(format!("{farewell}\n\n{}", self.town.latest_news()))
    }

    /// Search the current town for its treasure, once per town.
    pub fn search_for_treasure(&mut self) -> SessionResult<String> {
        if self.searched {
            return Ok("You've already searched this town".to_string());
        }
        self.searched = true;

        let treasure = self.treasure;
        if !treasure.is_valuable() {
            return Ok("You found dust... better luck next time!".to_string());
        }

        let hunter = self.town.hunter_mut()?;
        if !hunter.add_treasure(treasure) {
            return Ok(format!(
                "You found a {treasure}, but you already have one."
            ));
        }
        let mut out = format!("You found a {treasure}\n{}", hunter.treasure_info());
        if hunter.has_full_set() {
            out.push_str(
                "\nCongratulations, you have found the last of the three treasures, you win!",
            );
            self.state = SessionState::Won;
            info!(towns = self.towns_visited, "treasure set complete");
        }
        Ok(out)
    }
}

/// Build a fresh town for the hunter and hide its treasure.
fn enter_town(rules: &PresetRules, hunter: Hunter, roller: &mut impl Roller) -> (Town, Treasure) {
    let shop = Shop::new(rules.markdown).with_swords(rules.sells_swords);
    let mut town = Town::new(shop, rules.toughness, roller);
    town.arrive(hunter);
    let treasure = Treasure::from_roll(roller.between(1, 4));
    debug!(%treasure, "treasure hidden");
    (town, treasure)
}
