use super::context::Tables;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

impl Tables {
    /// writes one catalogue per level into the folder, named d_1.csv,
    /// d_2.csv, and so on; existing files are replaced. every planned
    /// row is listed with its count and both source names.
    pub fn write_csv(&self, folder: &Path) -> std::io::Result<()> {
        for table in self.tables() {
            let path = folder.join(format!("d_{}.csv", table.d()));
            let mut file = BufWriter::new(File::create(&path)?);
            write!(file, "t,n,short source,long source")?;
            for t in 0..table.len() {
                let row = table.row(t);
                write!(file, "\n{}, {}, {}, {}", t, row.n, row.recipe.source(), row.recipe)?;
            }
            file.flush()?;
            log::info!("{:<32}{}", "wrote table", path.display());
        }
        Ok(())
    }
}
