use anyhow::{anyhow, Context, Result};
use arrayset::ArraySet;
use clap::Parser;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = 1024)]
    count: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Remove every added element again, in random order.
    #[arg(long)]
    remove: bool,
}

fn add_all(set: &mut ArraySet<u32>, values: &[u32]) -> usize {
    let mut copies = 0;
    for value in values {
        let capacity = set.capacity();
        let len = set.len();
        set.add(*value);
        if set.capacity() != capacity {
            info!("capacity {} -> {} at len {}", capacity, set.capacity(), len);
            copies += len;
        }
    }
    copies
}

fn remove_all(set: &mut ArraySet<u32>, values: &[u32]) -> Result<usize> {
    let mut shifts = 0;
    for value in values {
        let position = set
            .position(value)
            .with_context(|| anyhow!("{} missing before removal", value))?;
        shifts += set.len() - 1 - position;
        set.remove(value)
            .with_context(|| format!("unable to remove {}", value))?;
        debug!("removed {} from position {}", value, position);
    }
    Ok(shifts)
}

fn process(args: &Args) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let values: Vec<u32> = (0..args.count).map(|_| rng.gen()).collect();

    let mut set = ArraySet::default();
    let copies = add_all(&mut set, &values);
    println!(
        "added {} elements: {} copies during growth, {:.3} per add, final capacity {}",
        set.len(),
        copies,
        copies as f64 / args.count.max(1) as f64,
        set.capacity()
    );

    if args.remove {
        let mut order = values;
        order.shuffle(&mut rng);
        let shifts = remove_all(&mut set, &order)?;
        println!(
            "removed {} elements: {} shifts, {:.3} per remove",
            order.len(),
            shifts,
            shifts as f64 / order.len().max(1) as f64
        );
        if set.is_nonempty() {
            return Err(anyhow!("{} elements left after removing all", set.len()));
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = process(&args) {
        error!("error: {:#}", e);
        std::process::exit(1);
    }
}
