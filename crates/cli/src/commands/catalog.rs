//! Print the fixed sample catalog.

use shop_seed::CATALOG;

/// Write the catalog to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print() -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(&CATALOG)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
