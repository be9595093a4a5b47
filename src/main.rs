use itertools::Itertools;

use supply_stacks::parser::parse_input;
use supply_stacks::{Crane, Error};

fn rearrange(input: &str, crane: Crane) -> Result<String, Error> {
    let (mut ship, moves) = parse_input(input)?;
    ship.perform_all(crane, &moves)?;
    ship.tops()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for path in ["data/example.txt", "data/input.txt"] {
        let input = std::fs::read_to_string(path)?;

        let answers: Vec<String> = [Crane::CrateMover9000, Crane::CrateMover9001]
            .into_iter()
            .map(|crane| rearrange(&input, crane))
            .try_collect()?;

        for answer in answers {
            println!("{}", answer);
        }
    }

    Ok(())
}
