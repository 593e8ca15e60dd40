//! 区划级联数据命令行工具
//!
//! ```bash
//! region-cascader countries
//! region-cascader states CN
//! region-cascader cities CN 32
//! region-cascader districts CN 32 3209
//! region-cascader labels CN 32 3209 320923
//! region-cascader search 阜宁 --limit 10
//! region-cascader tree
//! ```

use clap::{Parser, Subcommand};
use region_cascader::{RegionResolver, ResolverConfig};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "region-cascader")]
#[command(about = "Country / province / city / district lookup for cascading selectors")]
struct Cli {
    /// 配置文件路径
    #[arg(long, default_value = region_cascader::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 国家列表
    Countries,

    /// 省/州列表
    States { country: String },

    /// 城市列表
    Cities { country: String, state: String },

    /// 区县列表
    Districts {
        country: String,
        state: String,
        city: String,
    },

    /// 代码路径对应的名称
    Labels {
        #[arg(required = true)]
        path: Vec<String>,
    },

    /// 按名称搜索中国区划
    Search {
        query: String,

        /// 最大结果数，默认取配置中的 search_limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 完整展开的中国区划树
    Tree,

    /// 数据集概况
    Stats,
}

#[derive(Serialize)]
struct Stats {
    provinces: usize,
    countries: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = ResolverConfig::load(&cli.config)?;
    config.apply_env()?;
    let resolver = RegionResolver::from_config(&config)?;

    match cli.command {
        Commands::Countries => print_json(&resolver.list_countries())?,
        Commands::States { country } => print_json(&resolver.list_states(&country))?,
        Commands::Cities { country, state } => {
            print_json(&resolver.list_cities(&country, &state))?
        }
        Commands::Districts {
            country,
            state,
            city,
        } => print_json(&resolver.list_districts(&country, &state, &city))?,
        Commands::Labels { path } => {
            let path: Vec<&str> = path.iter().map(String::as_str).collect();
            print_json(&resolver.label_path(&path))?
        }
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search_limit);
            print_json(&resolver.search(&query, limit))?
        }
        Commands::Tree => print_json(&resolver.china_tree())?,
        Commands::Stats => print_json(&Stats {
            provinces: resolver.china().provinces().len(),
            countries: resolver.world().countries().len(),
        })?,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}
