use anyhow::Result;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::FeaturesArgs) -> Result<()> {
    let config = args.config.load()?;
    config.validate()?;

    for (index, feature) in config.enabled().enumerate() {
        let mut notes = Vec::new();
        if feature.is_inverse() { notes.push("lower is better"); }
        if feature.density { notes.push("per km²"); }

        let notes = if notes.is_empty() { String::new() } else { format!(" [{}]", notes.join(", ")) };
        println!("{:>2}. {:<20} {:<16} {}{}", index, feature.name, feature.category.to_str(), feature.label, notes);
    }

    let disabled: Vec<_> = config.features.iter()
        .filter(|feature| !feature.enabled)
        .map(|feature| feature.name.as_str())
        .collect();
    if !disabled.is_empty() {
        println!("disabled: {}", disabled.join(", "));
    }

    Ok(())
}
