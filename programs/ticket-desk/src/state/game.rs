use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Sunday first, matching `index()`.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Sunday = 0 ... Saturday = 6. Values wrap modulo 7.
    pub fn from_index(index: u8) -> Weekday {
        Self::ALL[(index % 7) as usize]
    }

    pub fn index(self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

/// Which of a game's two number ranges an operation targets.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Primary,
    Secondary,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameId {
    #[default]
    Powerball,
    MegaMillions,
    EuroMillions,
    UkLotto,
}

impl GameId {
    /// Switcher order.
    pub const ALL: [GameId; 4] = [
        GameId::Powerball,
        GameId::MegaMillions,
        GameId::EuroMillions,
        GameId::UkLotto,
    ];

    pub fn definition(self) -> &'static GameDefinition {
        match self {
            GameId::Powerball => &POWERBALL,
            GameId::MegaMillions => &MEGA_MILLIONS,
            GameId::EuroMillions => &EURO_MILLIONS,
            GameId::UkLotto => &UK_LOTTO,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GameId::Powerball => "powerball",
            GameId::MegaMillions => "megamillions",
            GameId::EuroMillions => "euromillions",
            GameId::UkLotto => "uklotto",
        }
    }
}

/// Size of a number range and how many distinct numbers a ticket takes from it.
/// A pool with `picks == 0` is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolRule {
    pub size: u8,
    pub picks: u8,
}

impl PoolRule {
    pub const NONE: PoolRule = PoolRule { size: 0, picks: 0 };

    pub fn contains(&self, number: u8) -> bool {
        number >= 1 && number <= self.size
    }
}

/// Static rules for one lottery product.
#[derive(Debug, PartialEq, Eq)]
pub struct GameDefinition {
    pub id: GameId,
    pub name: &'static str,
    pub primary: PoolRule,
    pub secondary: PoolRule,
    pub secondary_label: Option<&'static str>,
    /// Price of a single draw entry, in whole currency units.
    pub unit_price: u64,
    pub draw_days: &'static [Weekday],
}

impl GameDefinition {
    pub fn pool(&self, pool: Pool) -> &PoolRule {
        match pool {
            Pool::Primary => &self.primary,
            Pool::Secondary => &self.secondary,
        }
    }

    pub fn draws_on(&self, weekday: Weekday) -> bool {
        self.draw_days.contains(&weekday)
    }
}

pub const POWERBALL: GameDefinition = GameDefinition {
    id: GameId::Powerball,
    name: "USA Powerball",
    primary: PoolRule { size: 69, picks: 5 },
    secondary: PoolRule { size: 26, picks: 1 },
    secondary_label: Some("Powerball"),
    unit_price: 180,
    draw_days: &[Weekday::Monday, Weekday::Wednesday, Weekday::Saturday],
};

pub const MEGA_MILLIONS: GameDefinition = GameDefinition {
    id: GameId::MegaMillions,
    name: "Mega Millions",
    primary: PoolRule { size: 70, picks: 5 },
    secondary: PoolRule { size: 25, picks: 1 },
    secondary_label: Some("Mega Ball"),
    unit_price: 180,
    draw_days: &[Weekday::Tuesday, Weekday::Friday],
};

pub const EURO_MILLIONS: GameDefinition = GameDefinition {
    id: GameId::EuroMillions,
    name: "EuroMillions",
    primary: PoolRule { size: 50, picks: 5 },
    secondary: PoolRule { size: 12, picks: 2 },
    secondary_label: Some("Lucky Stars"),
    unit_price: 160,
    draw_days: &[Weekday::Tuesday, Weekday::Friday],
};

pub const UK_LOTTO: GameDefinition = GameDefinition {
    id: GameId::UkLotto,
    name: "UK Lotto",
    primary: PoolRule { size: 59, picks: 6 },
    secondary: PoolRule::NONE,
    secondary_label: None,
    unit_price: 100,
    draw_days: &[Weekday::Wednesday, Weekday::Saturday],
};

pub fn game(id: GameId) -> &'static GameDefinition {
    id.definition()
}

pub fn games() -> impl Iterator<Item = &'static GameDefinition> {
    GameId::ALL.into_iter().map(GameId::definition)
}
