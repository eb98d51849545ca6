use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::TicketError;

/// Main ("white ball") numbers a player may pick from.
pub const PRIMARY_RANGE: RangeInclusive<u8> = 1..=69;
/// Powerball numbers a player may pick from.
pub const SECONDARY_RANGE: RangeInclusive<u8> = 1..=26;
/// How many distinct main numbers make up a full ticket.
pub const PRIMARY_PICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Main,
    Powerball,
}

impl NumberKind {
    pub fn label(self) -> &'static str {
        match self {
            NumberKind::Main => "main number",
            NumberKind::Powerball => "Powerball",
        }
    }
}

/// A complete, validated selection ready to be sent.
///
/// Deserialization goes through [`Ticket::new`], so a decoded ticket obeys the
/// same rules as one built from the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTicket")]
pub struct Ticket {
    player_name: String,
    main_numbers: [u8; PRIMARY_PICK_COUNT],
    powerball: u8,
}

#[derive(Deserialize)]
struct RawTicket {
    player_name: String,
    main_numbers: Vec<u8>,
    powerball: Option<u8>,
}

impl TryFrom<RawTicket> for Ticket {
    type Error = TicketError;

    fn try_from(raw: RawTicket) -> Result<Self, Self::Error> {
        Ticket::new(&raw.player_name, &raw.main_numbers, raw.powerball)
    }
}

impl Ticket {
    /// Validates a raw form selection.
    ///
    /// The name check runs before the completeness check so the first
    /// missing piece is the one reported.
    pub fn new(
        player_name: &str,
        main_numbers: &[u8],
        powerball: Option<u8>,
    ) -> Result<Self, TicketError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(TicketError::MissingName);
        }

        let (Ok(mut main), Some(powerball)) = (
            <[u8; PRIMARY_PICK_COUNT]>::try_from(main_numbers),
            powerball,
        ) else {
            return Err(TicketError::IncompleteSelection {
                main_selected: main_numbers.len(),
                powerball_selected: powerball.is_some(),
            });
        };

        for value in main {
            if !PRIMARY_RANGE.contains(&value) {
                return Err(TicketError::OutOfRange {
                    kind: NumberKind::Main,
                    value,
                });
            }
        }
        if !SECONDARY_RANGE.contains(&powerball) {
            return Err(TicketError::OutOfRange {
                kind: NumberKind::Powerball,
                value: powerball,
            });
        }

        main.sort_unstable();
        if let Some(pair) = main.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(TicketError::DuplicateNumber(pair[0]));
        }

        Ok(Self {
            player_name: player_name.to_string(),
            main_numbers: main,
            powerball,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn main_numbers(&self) -> &[u8; PRIMARY_PICK_COUNT] {
        &self.main_numbers
    }

    pub fn powerball(&self) -> u8 {
        self.powerball
    }

    /// Human-readable line sent to the collection endpoint.
    pub fn message(&self) -> String {
        let main = self
            .main_numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Name: {}, Main numbers: {main}, Powerball: {}",
            self.player_name, self.powerball
        )
    }
}
