use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Who is making the decisions for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A participant in a game. Each game assigns one player to make the code, and the other to break
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
}

impl Player {
    pub fn human(name: &str) -> Player {
        Player {
            name: name.to_string(),
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player with a randomly numbered name, like `Computer 42`.
    pub fn computer<R: Rng + ?Sized>(rng: &mut R) -> Player {
        Player {
            name: format!("Computer {}", rng.gen_range(0..1000)),
            kind: PlayerKind::Computer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::human("Anonymous")
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The players of one game, by role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roles {
    pub code_maker: Player,
    pub code_breaker: Player,
}

/// Fills the lineup up to two players with computers, then randomly assigns the roles.
///
/// Only the first two players take part.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_mastermind_solver::{assign_roles, Player, PlayerKind};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let roles = assign_roles(vec![Player::human("Ada")], &mut rng);
///
/// let kinds = [roles.code_maker.kind(), roles.code_breaker.kind()];
/// assert!(kinds.contains(&PlayerKind::Human));
/// assert!(kinds.contains(&PlayerKind::Computer));
/// ```
pub fn assign_roles<R: Rng + ?Sized>(mut players: Vec<Player>, rng: &mut R) -> Roles {
    players.truncate(2);
    while players.len() < 2 {
        players.push(Player::computer(rng));
    }
    players.shuffle(rng);
    let code_breaker = players.pop().unwrap_or_default();
    let code_maker = players.pop().unwrap_or_default();
    Roles {
        code_maker,
        code_breaker,
    }
}
