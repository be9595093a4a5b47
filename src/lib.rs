pub mod error;
pub mod parser;
pub mod ship;

pub use error::Error;
pub use ship::{Crane, Crate, Move, Ship};

#[cfg(test)]
mod tests {
    use super::parser::parse_input;
    use super::Crane;

    const EXAMPLE: &str = include_str!("../data/example.txt");

    #[test]
    fn rearranges_the_example_with_both_cranes() {
        let (ship, moves) = parse_input(EXAMPLE).unwrap();

        let mut one_at_a_time = ship.clone();
        one_at_a_time
            .perform_all(Crane::CrateMover9000, &moves)
            .unwrap();
        assert_eq!(one_at_a_time.tops().unwrap(), "CMZ");

        let mut in_bulk = ship;
        in_bulk.perform_all(Crane::CrateMover9001, &moves).unwrap();
        assert_eq!(in_bulk.tops().unwrap(), "MCD");
    }

    #[test]
    fn replaying_the_moves_is_deterministic() {
        let (ship, moves) = parse_input(EXAMPLE).unwrap();

        let mut first = ship.clone();
        let mut second = ship.clone();
        first.perform_all(Crane::CrateMover9001, &moves).unwrap();
        second.perform_all(Crane::CrateMover9001, &moves).unwrap();

        assert_eq!(first, second);
    }
}
