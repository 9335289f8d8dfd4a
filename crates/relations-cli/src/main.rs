use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};
use itertools::Itertools;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use relations::{
    RelationMatrix, count_transitive_relations, equivalence_classes, equivalence_closure,
    is_reflexive, is_symmetric, is_transitive, matrix_from_int, read_matrix, reflexive_closure,
    symmetric_closure, transitive_closure, write_matrix,
};

use crate::cli::{Cli, Command};

mod cli;

// Checking 2^36 relations is not going to finish
const MAX_COUNT_SIZE: usize = 5;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    let level = args.log_level.into();
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    match args.cmd {
        Command::Analyze { input, output } => analyze(&input, output.as_deref()),
        Command::Count { sizes } => count(&sizes),
        Command::Decode { num, size } => decode(num, size),
        Command::Random { size, probability, seed, output } => {
            random(size, probability, seed, output.as_deref())
        }
    }
}

fn print_matrix(matrix: &RelationMatrix) {
    for row in matrix.rows() {
        println!("[{}]", row.iter().map(|&b| u8::from(b)).join(", "));
    }
}

fn analyze(input: &Path, output: Option<&Path>) -> color_eyre::Result<()> {
    let matrix = read_matrix(input)
        .wrap_err_with(|| format!("Could not read '{}'", input.display()))?;
    info!("read relation on {} elements", matrix.dim());
    println!("Relation A:");
    print_matrix(&matrix);
    println!();

    if is_reflexive(&matrix) {
        println!("A is already reflexive");
    } else {
        println!("Reflexive closure A^r:");
        print_matrix(&reflexive_closure(&matrix));
    }
    println!();
    if is_symmetric(&matrix) {
        println!("A is already symmetric");
    } else {
        println!("Symmetric closure A^s:");
        print_matrix(&symmetric_closure(&matrix));
    }
    println!();
    if is_transitive(&matrix) {
        println!("A is already transitive");
    } else {
        println!("Transitive closure A^t:");
        print_matrix(&transitive_closure(&matrix));
    }

    let equivalence = equivalence_closure(&matrix);
    println!();
    println!("Equivalence closure:");
    print_matrix(&equivalence);
    match equivalence_classes(&equivalence) {
        Ok(classes) => {
            let classes =
                classes.iter().map(|class| format!("{{{}}}", class.iter().join(", "))).join(" ");
            println!("Equivalence classes: {}", classes);
        }
        Err(property) => bail!("Equivalence closure is not {}", property),
    }

    if let Some(output) = output {
        write_matrix(output, &equivalence)
            .wrap_err_with(|| format!("Could not write '{}'", output.display()))?;
        info!("wrote equivalence closure to {}", output.display());
        let written = read_matrix(output)?;
        println!();
        println!("Read back from {}:", output.display());
        print_matrix(&written);
    }
    Ok(())
}

fn count(sizes: &[usize]) -> color_eyre::Result<()> {
    for &n in sizes {
        if n > MAX_COUNT_SIZE {
            let max = MAX_COUNT_SIZE;
            bail!("Counting relations on {} elements would take too long (max {})", n, max);
        }
    }
    for &n in sizes {
        println!("Transitive relations on {} elements: {}", n, count_transitive_relations(n));
    }
    Ok(())
}

fn decode(num: u64, n: usize) -> color_eyre::Result<()> {
    if n > relations::counting::MAX_CODE_ELEMENTS {
        bail!("Relations on {} elements can't be decoded from a u64", n);
    }
    if num >> (n * n) != 0 {
        bail!("{} has more than {} binary digits", num, n * n);
    }
    print!("{}", matrix_from_int(num, n));
    Ok(())
}

fn random(n: usize, p: f64, seed: Option<u64>, output: Option<&Path>) -> color_eyre::Result<()> {
    if !(0.0..=1.0).contains(&p) {
        bail!("Probability must be between 0 and 1, got {}", p);
    }
    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_os_rng(),
    };
    let matrix = RelationMatrix::bernoulli(&mut rng, n, p);
    match output {
        Some(output) => {
            write_matrix(output, &matrix)?;
            info!("wrote relation on {} elements to {}", n, output.display());
        }
        None => print!("{}", matrix),
    }
    Ok(())
}
