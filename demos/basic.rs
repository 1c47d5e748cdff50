//! Basic example of using the word search engine

use wordsearch_core::{Generator, PuzzleConfig, PuzzleSession};

fn main() {
    // Generate a puzzle with the default nine words
    println!("Generating a 15x15 puzzle...\n");
    let mut generator = Generator::new();
    let mut session = match PuzzleSession::with_generator(PuzzleConfig::default(), &mut generator)
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    println!("{}", session.grid());
    println!("Words: {}", session.word_list().join(", "));
    if !session.unplaced().is_empty() {
        println!("Could not place: {}", session.unplaced().join(", "));
    }

    // Show where each word went
    println!("\nPlacements:");
    for placement in session.placements() {
        println!(
            "  {:<14} {} {}",
            placement.word, placement.start, placement.direction
        );
    }

    // Select every placed word back to front, the way a player dragging
    // from the last letter would
    println!("\nSelecting words in reverse...");
    let placements = session.placements().to_vec();
    for placement in &placements {
        let cells = placement.cells();
        if let (Some(&first), Some(&last)) = (cells.first(), cells.last()) {
            session.begin_selection(last);
            session.extend_selection(first);
            match session.end_selection() {
                Some(found) => println!("  Found {} over {} cells", found.word, found.cells.len()),
                None => println!("  {} not matched", placement.word),
            }
        }
    }

    println!(
        "\n{}/{} words found, complete: {}",
        session.found_words().len(),
        session.word_list().len(),
        session.is_complete()
    );
}
