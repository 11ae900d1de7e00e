pub fn run() -> anyhow::Result<()> {
    println!("artube-search {}", env!("CARGO_PKG_VERSION"));
    println!("Keyword index and search cache for artube content");
    Ok(())
}
