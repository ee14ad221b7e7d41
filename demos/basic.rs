//! Basic example of using the time-fitting engine

use timeseeker_core::{find_earliest, DigitSet, Seeker};

fn main() {
    // One-call entry point: validate and search together
    println!("Fitting digits [1, 5, 2, 3, 6, 4]...");
    match find_earliest(&[1, 5, 2, 3, 6, 4]) {
        Ok(time) => println!("Earliest time: {}\n", time),
        Err(err) => println!("Failed: {}\n", err),
    }

    // The two steps can also be taken separately
    println!("Fitting digits [2, 3, 8, 6, 4, 1] step by step...");
    if let Ok(digits) = DigitSet::new(&[2, 3, 8, 6, 4, 1]) {
        let seeker = Seeker::new(digits);
        if let Some(time) = seeker.earliest() {
            println!("Earliest time: {}", time);
            println!(
                "Components: {:02}h {:02}m {:02}s\n",
                time.hour(),
                time.minute(),
                time.second()
            );
        } else {
            println!("No valid time can be formed\n");
        }
    }

    // Some digit sets admit no valid time at all
    println!("Fitting digits [2, 4, 5, 9, 5, 9]...");
    match find_earliest(&[2, 4, 5, 9, 5, 9]) {
        Ok(time) => println!("Earliest time: {}", time),
        Err(err) => println!("Failed: {}", err),
    }

    // Structurally invalid input is reported distinctly
    println!("\nFitting digits [4, -1, 4, 5, 9, 9]...");
    match find_earliest(&[4, -1, 4, 5, 9, 9]) {
        Ok(time) => println!("Earliest time: {}", time),
        Err(err) => println!("Failed: {}", err),
    }
}
