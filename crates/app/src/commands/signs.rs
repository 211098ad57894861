use signs_core::Catalog;
use signs_core::model::{CategoryId, SearchFilters, SignColor, SignShape};

pub fn execute(
    category: Option<String>,
    shape: Option<SignShape>,
    color: Option<SignColor>,
    query: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    let mut filters = SearchFilters {
        shape,
        color,
        query,
        ..SearchFilters::default()
    };
    if let Some(raw) = category {
        let id: CategoryId = raw.parse()?;
        if catalog.category(&id).is_none() {
            return Err(format!("unknown category: {id}").into());
        }
        filters.category = Some(id);
    }

    let signs = catalog.filter(&filters);
    if signs.is_empty() {
        println!("No signs found.");
        return Ok(());
    }

    for sign in &signs {
        let urdu = sign.urdu_name.as_deref().unwrap_or("");
        println!(
            "{:<28} {:<22} {:<10} {:<7} {}",
            sign.id.as_str(),
            sign.name,
            sign.shape,
            sign.color,
            urdu
        );
        println!("    {}", sign.significance);
    }
    println!("{} sign(s)", signs.len());
    Ok(())
}

pub fn categories() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        let count = catalog.signs_in_category(&category.id).count();
        println!(
            "{} {:<14} {:<20} {} sign(s)",
            category.icon,
            category.id.as_str(),
            category.name,
            count
        );
        println!("    {}", category.description);
    }
    Ok(())
}
