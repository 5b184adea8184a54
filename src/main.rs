extern crate symmography;

use std::path::Path;

use symmography::{load_board, try, write_nails, write_strings, P2};

fn main() {
    try(|| {
        // Load the board parameters.
        let board = load_board(Path::new("board.csv"))?;
        println!("Placing nails on a {:?}.", board.frame);

        // Place the nails and string the configured rule over them.
        let layout = board.nail_layout(P2::origin())?;
        let strings = board.string_pattern(&layout)?;
        println!(
            "Placed {} nails and {} strings.",
            layout.len(),
            strings.len()
        );

        // Write the drilling template and stringing instructions.
        write_nails(Path::new("nails.csv"), &layout, &board.runs)?;
        write_strings(Path::new("strings.csv"), &strings)?;
        Ok(())
    })
}
