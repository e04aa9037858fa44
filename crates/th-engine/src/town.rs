//! A town and the randomized events it resolves.
//!
//! A town is built without a hunter. The hunter moves in with
//! [`Town::arrive`] and moves out again with [`Town::depart`]; every
//! operation that needs the hunter fails with [`TownError::Unoccupied`]
//! in between.

use th_core::{Hunter, Item, Roller, Shop, ShopRequest, Terrain};
use tracing::debug;

use crate::encounter::{
    Brawl, Crossing, Dig, EASY_TOUGHNESS, ITEM_BREAK_CHANCE, MAX_BRAWL_GOLD, MAX_DIG_GOLD,
    TEST_TOUGHNESS, Toughness, no_trouble_chance,
};
use crate::error::{TownError, TownResult};

/// Who is in town.
#[derive(Debug, Clone, Default)]
pub enum Occupancy {
    /// Nobody has arrived yet, or the hunter has left.
    #[default]
    Unoccupied,
    /// The hunter is in town.
    Occupied(Hunter),
}

/// A town ringed by terrain, with a shop and at most one visiting hunter.
#[derive(Debug, Clone)]
pub struct Town {
    terrain: Terrain,
    shop: Shop,
    toughness: Toughness,
    visitor: Occupancy,
    has_dug: bool,
    latest_news: String,
    lost: bool,
}

impl Town {
    /// Build a town, rolling its terrain and then its toughness.
    pub fn new(shop: Shop, toughness: f64, roller: &mut impl Roller) -> Self {
        let terrain = Terrain::from_draw(roller.unit());
        let flags = Toughness {
            test: toughness == TEST_TOUGHNESS,
            easy: toughness == EASY_TOUGHNESS,
            tough: roller.unit() < toughness,
        };
        debug!(%terrain, ?flags, toughness, "town built");
        Self::with_terrain(shop, terrain, flags)
    }

    /// Build a town with a known terrain and toughness.
    pub fn with_terrain(shop: Shop, terrain: Terrain, toughness: Toughness) -> Self {
        Self {
            terrain,
            shop,
            toughness,
            visitor: Occupancy::Unoccupied,
            has_dug: false,
            latest_news: String::new(),
            lost: false,
        }
    }

    /// The surrounding terrain.
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// The town's toughness flags.
    pub fn toughness(&self) -> Toughness {
        self.toughness
    }

    /// The most recent news, as last shown to the player.
    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }

    /// Whether a brawl here ruined the hunter.
    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Whether the hunter already dug during this visit.
    pub fn has_dug(&self) -> bool {
        self.has_dug
    }

    /// The visiting hunter, if any.
    pub fn hunter(&self) -> Option<&Hunter> {
        match &self.visitor {
            Occupancy::Occupied(hunter) => Some(hunter),
            Occupancy::Unoccupied => None,
        }
    }

    /// Static description naming the terrain.
    pub fn info(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }

    /// The visiting hunter, for bookkeeping the town does not do itself.
    pub fn hunter_mut(&mut self) -> TownResult<&mut Hunter> {
        match &mut self.visitor {
            Occupancy::Occupied(hunter) => Ok(hunter),
            Occupancy::Unoccupied => Err(TownError::Unoccupied),
        }
    }

    /// Welcome a hunter into town.
    pub fn arrive(&mut self, hunter: Hunter) -> &str {
        let mut news = format!("Welcome to town, {}.", hunter.name());
        if self.toughness.tough {
            news.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            news.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.visitor = Occupancy::Occupied(hunter);
        self.latest_news = news;
        &self.latest_news
    }

    /// Send the hunter on their way, handing them back to the caller.
    pub fn depart(&mut self) -> TownResult<Hunter> {
        match std::mem::take(&mut self.visitor) {
            Occupancy::Occupied(hunter) => Ok(hunter),
            Occupancy::Unoccupied => Err(TownError::Unoccupied),
        }
    }

    /// Try to cross the surrounding terrain.
    ///
    /// Crossing needs the terrain's item and may break it. A successful
    /// crossing ends the visit, so the dig flag resets.
    pub fn leave_town(&mut self, roller: &mut impl Roller) -> TownResult<Crossing> {
        let terrain = self.terrain;
        let item = terrain.needed_item();
        let easy = self.toughness.easy;
        let hunter = self.hunter_mut()?;

        let crossing = if hunter.has_item(item) {
            let item_lost = check_item_break(easy, roller);
            if item_lost {
                hunter.remove_item(item);
            }
            Crossing::Crossed {
                item,
                terrain,
                item_lost,
            }
        } else {
            Crossing::Blocked {
                hunter: hunter.name().to_string(),
                item,
            }
        };

        if crossing.crossed() {
            self.has_dug = false;
        }
        debug!(?crossing, "leave town");
        self.latest_news = crossing.to_string();
        Ok(crossing)
    }

    /// Buy or sell at the shop.
    pub fn enter_shop(&mut self, request: &ShopRequest) -> TownResult<&str> {
        let Occupancy::Occupied(hunter) = &mut self.visitor else {
            return Err(TownError::Unoccupied);
        };
        self.latest_news = self.shop.enter(hunter, request);
        Ok(&self.latest_news)
    }

    /// Pick a fight for gold.
    ///
    /// A draw below the no-trouble chance starts an encounter. A sword wins
    /// it outright; otherwise a second draw above the same chance wins the
    /// brawl and anything else loses it.
    pub fn look_for_trouble(&mut self, roller: &mut impl Roller) -> TownResult<Brawl> {
        let chance = no_trouble_chance(self.toughness);
        let hunter = self.hunter_mut()?;

        let draw = roller.unit();
        let brawl = if draw < chance {
            let gold = roller.between(1, MAX_BRAWL_GOLD);
            if hunter.has_item(Item::Sword) {
                Brawl::Intimidated { gold }
            } else if roller.unit() > chance {
                Brawl::Won { gold }
            } else {
                Brawl::Lost { gold }
            }
        } else {
            Brawl::NoTrouble
        };
        hunter.change_gold(brawl.gold_delta());
        let ruined = brawl.was_fight() && hunter.is_ruined();
        debug!(draw, chance, ?brawl, ruined, "look for trouble");

        if ruined {
            self.lost = true;
        }
        if let Brawl::Intimidated { .. } = brawl {
            if !self.latest_news.is_empty() {
                self.latest_news.push('\n');
            }
            self.latest_news.push_str(&brawl.to_string());
        } else {
            self.latest_news = brawl.to_string();
        }
        Ok(brawl)
    }

    /// Dig for gold, once per visit.
    ///
    /// The result is returned to the caller and never recorded as news.
    pub fn dig_for_gold(&mut self, roller: &mut impl Roller) -> TownResult<Dig> {
        let already_dug = self.has_dug;
        let hunter = self.hunter_mut()?;

        let dig = if !hunter.has_item(Item::Shovel) {
            Dig::NoShovel
        } else if already_dug {
            Dig::AlreadyDug
        } else if roller.between(1, 2) == 1 {
            let gold = roller.between(1, MAX_DIG_GOLD);
            hunter.earn_gold(gold);
            Dig::Gold { gold }
        } else {
            Dig::Dirt
        };

        if matches!(dig, Dig::Gold { .. } | Dig::Dirt) {
            self.has_dug = true;
        }
        debug!(?dig, "dig for gold");
        Ok(dig)
    }
}

/// Whether a crossing item breaks. Items never break in easy towns.
fn check_item_break(easy: bool, roller: &mut impl Roller) -> bool {
    let draw = roller.unit();
    !easy && draw < ITEM_BREAK_CHANCE
}
