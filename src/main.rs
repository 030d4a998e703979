use log::{info, warn};
use person_record::{EntityModel, Person, PersonConfig, from_json_validated, to_json};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Suggested names: {:?}", Person::suggested_names());

    let mut alice = Person::new("Alice", 30);
    info!("Created {alice}");

    alice.set_age(31);
    info!("After birthday update: {alice} (key {})", alice.key());

    let jack = Person::new("Jack", 1);
    let jill = Person::new("Jill", 1);
    let mut junior = &jack + &jill;
    junior = junior.celebrate_birthday();
    info!("{} just turned {}!", junior.name(), junior.age());

    // Permissive by default, strict on request
    let strict = PersonConfig::strict();
    if let Err(e) = alice.try_set_age(-1, &strict) {
        warn!("Strict config refused update: {e}");
    }
    alice.set_age(-1);
    info!("Permissive setter accepted: {alice}");

    let json = to_json(&junior)?;
    info!("Serialized: {json}");
    let restored = from_json_validated(&json, &strict)?;
    info!("Restored: {restored}");

    for index in 0..Person::suggested_names().len() {
        if let Some(person) = Person::suggested(index) {
            info!("Suggested person {index}: {person}");
        }
    }

    Ok(())
}
