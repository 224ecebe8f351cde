// Defines an enum from a single list, then prints and parses its spellings.

use spelled_enum::define_named_enum;

define_named_enum! {
    pub enum Colour { red, green, blue }
}

fn main() {
    let colour = Colour::green;

    println!("{}", colour); // green
    let name: &str = colour.as_str(); // "green"
    println!("{} has ordinal {} of {}", name, colour.ordinal(), Colour::TOTAL);

    if let Some(parsed) = Colour::from_name("blue") {
        println!("Got enum value {}", parsed); // Got enum value blue
    }

    match "purple".parse::<Colour>() {
        Ok(parsed) => println!("Got enum value {}", parsed),
        Err(e) => println!("{}", e), // unknown Colour spelling "purple"
    }
}
