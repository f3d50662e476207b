use crate::cli::{Args, LogLevel};
use anyhow::{bail, Context};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warsa_cemeteries::registry::Registry;
use warsa_cemeteries::serialize::{serialize_graphs, RdfFormat};
use warsa_cemeteries::{convert, CemeteryTable, ConversionOptions, IdentifierPolicy};

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.loglevel, args.log_file.as_deref())?;
    run(args)
}

fn init_tracing(level: LogLevel, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open the log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let format = rdf_format_from_name(&args.format)?;

    let table = CemeteryTable::from_path(&args.input, delimiter(args.delimiter)?)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let registry = if let Some(path) = &args.registry {
        Registry::from_path(path, delimiter(args.registry_delimiter)?)
            .with_context(|| format!("Failed to read the registry {}", path.display()))?
    } else {
        Registry::new()
    };

    let options = ConversionOptions::default().with_identifiers(IdentifierPolicy {
        prefix: args.id_prefix,
        base: args.id_base,
        suffix: args.id_suffix,
    });
    let conversion = convert(&table, registry, options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    let outputs = serialize_graphs(&conversion.graphs, format)?;
    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for (kind, content) in outputs {
        let path = args.output.join(kind.file_name(format));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Graph {} serialized to {}", kind.file_stem(), path.display());
    }
    Ok(())
}

fn delimiter(delimiter: char) -> anyhow::Result<u8> {
    match u8::try_from(delimiter) {
        Ok(byte) if byte.is_ascii() => Ok(byte),
        _ => bail!("The delimiter '{delimiter}' is not an ASCII character"),
    }
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::prelude::*;

    #[allow(clippy::non_ascii_literal)]
    const TABLE: &str = "tyyppi;nro;nykyiset_kunnat;kuvaukset_toteuttanut_kameraseura;hautausmaan_nimi;arkkitehti;hautoja;perustettu;paljastettu;nimi;kuvanveistäjä;pituus_n;leveys_e;tarkka_katuosoite;kuva_1_yleiskuva_sankarihautausmaasta;kuva_1_kuvaajan_nimi;kuva_2_yksittäinen_hauta_risteineen_muistolaattoineen;kuva_2_kuvaajan_nimi;kuva_3_muistomerkki;kuva_3_kuvaajan_nimi;kuva_4_yleiskuva;kuva_4_kuvaajan_nimi;kuva_5_muu_muistomerkki;kuva_5_kuvaajan_nimi\nsankarihautausmaa;14;Kouvola / Elimäki, Suomi;;Elimäen sankarihautausmaa;;97;;;;;60.42.55 N;26.27.12 E;;014_1.jpg;Liisa Laine;;;;;;;;\nsankarihautausmaa;15;Kotka, Suomi;;Kotkan sankarihautausmaa;;;;;;;;;;;;;;;;;;;\n";

    #[allow(clippy::non_ascii_literal)]
    const REGISTRY: &str = "original_narc_name;uri\n\
        Elimäki, Suomi;http://ldf.fi/warsa/places/cemeteries/c_140\n\
        Porvoo, Suomi;http://ldf.fi/warsa/places/cemeteries/c_200\n";

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("cemeteries");
        command.arg("--");
        command
    }

    fn input_dir() -> Result<TempDir> {
        let dir = TempDir::new()?;
        dir.child("cemeteries.csv").write_str(TABLE)?;
        dir.child("registry.csv").write_str(REGISTRY)?;
        Ok(dir)
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn cli_convert_table() -> Result<()> {
        let dir = input_dir()?;
        cli_command()
            .arg(dir.child("cemeteries.csv").path())
            .arg(dir.child("out").path())
            .arg("--registry")
            .arg(dir.child("registry.csv").path())
            .arg("--registry-delimiter")
            .arg(";")
            .assert()
            .success();

        dir.child("out/cemeteries.ttl")
            .assert(predicate::str::contains("<http://ldf.fi/warsa/places/cemeteries/c_140>"))
            .assert(predicate::str::contains("<http://ldf.fi/warsa/places/cemeteries/c_3000>"))
            .assert(predicate::str::contains("<http://ldf.fi/warsa/places/cemeteries/c_200>"));
        dir.child("out/cemeteries-photographs.ttl")
            .assert(predicate::str::contains("\"Liisa Laine\""));
        dir.child("out/cemetery-photo-media.ttl")
            .assert(predicate::str::contains("3000x2000px/014_1.jpg"));
        dir.child("out/cemeteries-schema.ttl")
            .assert(predicate::str::contains("\"Former municipality\"@en"));
        Ok(())
    }

    #[test]
    fn cli_convert_to_ntriples_with_custom_identifiers() -> Result<()> {
        let dir = input_dir()?;
        cli_command()
            .arg(dir.child("cemeteries.csv").path())
            .arg(dir.child("out").path())
            .arg("--format")
            .arg("application/n-triples")
            .arg("--id-prefix")
            .arg("http://example.com/cemetery/")
            .arg("--id-base")
            .arg("1")
            .arg("--id-suffix")
            .arg("/entity")
            .assert()
            .success();

        dir.child("out/cemeteries.nt")
            .assert(predicate::str::contains("<http://example.com/cemetery/1/entity>"))
            .assert(predicate::str::contains("<http://example.com/cemetery/2/entity>"));
        dir.child("out/cemeteries-schema.nt")
            .assert(predicate::path::exists());
        Ok(())
    }

    #[test]
    fn cli_rejects_dataset_format() -> Result<()> {
        let dir = input_dir()?;
        cli_command()
            .arg(dir.child("cemeteries.csv").path())
            .arg(dir.child("out").path())
            .arg("--format")
            .arg("nq")
            .assert()
            .failure()
            .stderr(predicate::str::contains("plain graphs"));
        dir.child("out").assert(predicate::path::missing());
        Ok(())
    }

    #[test]
    fn cli_rejects_unknown_format() -> Result<()> {
        let dir = input_dir()?;
        cli_command()
            .arg(dir.child("cemeteries.csv").path())
            .arg(dir.child("out").path())
            .arg("--format")
            .arg("xlsx")
            .assert()
            .failure()
            .stderr(predicate::str::contains("The file format 'xlsx' is unknown"));
        Ok(())
    }

    #[test]
    fn cli_missing_input() -> Result<()> {
        let dir = TempDir::new()?;
        cli_command()
            .arg(dir.child("missing.csv").path())
            .arg(dir.child("out").path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"));
        Ok(())
    }

    #[test]
    fn cli_appends_to_log_file() -> Result<()> {
        let dir = input_dir()?;
        dir.child("cemeteries.log").write_str("previous run\n")?;
        cli_command()
            .env_remove("RUST_LOG")
            .arg(dir.child("cemeteries.csv").path())
            .arg(dir.child("out").path())
            .arg("--loglevel")
            .arg("info")
            .arg("--log-file")
            .arg(dir.child("cemeteries.log").path())
            .assert()
            .success();
        dir.child("cemeteries.log")
            .assert(predicate::str::starts_with("previous run\n"))
            .assert(predicate::str::contains("0 known cemeteries"));
        Ok(())
    }

    #[test]
    fn delimiter_must_be_ascii() {
        assert!(delimiter(';').is_ok_and(|byte| byte == b';'));
        assert!(delimiter('\u{E4}').is_err());
    }

    #[test]
    fn format_names() -> Result<()> {
        assert_eq!(rdf_format_from_name("ttl")?, RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("text/turtle")?, RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("nt")?, RdfFormat::NTriples);
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
