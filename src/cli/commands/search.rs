use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::SearchLogic;
use crate::errors::AppResult;
use crate::utils::date::parse_user_date;
use std::path::Path;

/// Handle the `search` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Search { file, emp, date } = cmd {
        let date = date.as_deref().map(parse_user_date).transpose()?;
        let emp = emp.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let all = SearchLogic::load(Path::new(file))?;
        let found = SearchLogic::search(&all, emp, date);

        if found.is_empty() {
            println!("No records found.");
        } else {
            println!("Found {} record(s):", found.len());
            for hit in found {
                println!("{}", SearchLogic::describe(hit));
            }
        }
    }

    Ok(())
}
