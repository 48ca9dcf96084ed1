use std::fs::File;
use std::path::PathBuf;

use tgc_lang::error::Result;
use tgc_lang::read::LangTableReader;
use tracing_test::traced_test;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
}

#[traced_test]
#[test]
fn parse_lang() -> Result<()> {
    let mut file = File::open(resource("single_entry.lang"))?;
    let lang = LangTableReader::new(&mut file)?;

    assert_eq!(lang.len(), 1);

    let first_entry = lang.by_key("test");
    assert!(first_entry.is_some());

    assert_eq!(first_entry.unwrap(), "testing");

    Ok(())
}

#[traced_test]
#[test]
fn parse_lang_verifying() -> Result<()> {
    let mut file = File::open(resource("single_entry.lang"))?;
    let lang = LangTableReader::verifying(&mut file)?;

    assert_eq!(lang.len(), 1);

    Ok(())
}
