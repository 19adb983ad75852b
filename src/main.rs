use selectform::SelectFormUI;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let snapshot = SelectFormUI::demo().run()?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
