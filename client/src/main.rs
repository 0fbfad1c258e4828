use anyhow::{format_err, Context, Result};
use clap::{Parser, Subcommand};
use configparser::ini::Ini;
use num_bigint::{BigInt, BigUint};
use sqrt_price_x96::{check_sqrt_price_x96, encode_sqrt_price_x96, format_sqrt_price_x96_hex};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    reserve0: BigInt,
    reserve1: BigInt,
    decimals0: i32,
    decimals1: i32,
}

impl Default for ClientConfig {
    /// 1 token_0 against 1000 token_1
    fn default() -> Self {
        ClientConfig {
            reserve0: BigInt::from(10u128.pow(18)),
            reserve1: BigInt::from(10u128.pow(21)),
            decimals0: 18,
            decimals1: 18,
        }
    }
}

fn load_cfg(client_config: &str) -> Result<ClientConfig> {
    if !Path::new(client_config).exists() {
        log::info!("{} not found, using the default pool", client_config);
        return Ok(ClientConfig::default());
    }
    let mut config = Ini::new();
    config
        .load(client_config)
        .map_err(|e| format_err!("load {}: {}", client_config, e))?;
    parse_cfg(&config)
}

fn parse_cfg(config: &Ini) -> Result<ClientConfig> {
    let mut pool_config = ClientConfig::default();
    if let Some(reserve0) = get_reserve(config, "reserve0")? {
        pool_config.reserve0 = reserve0;
    }
    if let Some(reserve1) = get_reserve(config, "reserve1")? {
        pool_config.reserve1 = reserve1;
    }
    if let Some(decimals0) = get_decimals(config, "decimals0")? {
        pool_config.decimals0 = decimals0;
    }
    if let Some(decimals1) = get_decimals(config, "decimals1")? {
        pool_config.decimals1 = decimals1;
    }
    Ok(pool_config)
}

fn get_reserve(config: &Ini, key: &str) -> Result<Option<BigInt>> {
    match config.get("Pool", key) {
        Some(value) if !value.is_empty() => {
            let reserve = BigInt::from_str(&value)
                .with_context(|| format!("{} must be an integer, got {}", key, value))?;
            Ok(Some(reserve))
        }
        _ => Ok(None),
    }
}

fn get_decimals(config: &Ini, key: &str) -> Result<Option<i32>> {
    let decimals = config
        .getint("Pool", key)
        .map_err(|e| format_err!("{}: {}", key, e))?;
    decimals
        .map(|d| i32::try_from(d).with_context(|| format!("{} out of range: {}", key, d)))
        .transpose()
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[arg(short, long, default_value = "client_config.ini")]
    pub config: String,
    #[command(subcommand)]
    pub command: Option<CommandsName>,
}
#[derive(Debug, Subcommand)]
pub enum CommandsName {
    /// Print sqrtPriceX96 in decimal and hex
    SqrtPrice,
    /// Check sqrtPriceX96 can initialize a pool
    CheckInitPrice,
}

fn check_init_price(sqrt_price_x96: &BigUint) -> String {
    match check_sqrt_price_x96(sqrt_price_x96) {
        Ok(word) => format!(
            "sqrtPriceX96: {}\nvalid initial price, words: {:?}",
            sqrt_price_x96, word.0
        ),
        Err(e) => format!("sqrtPriceX96 {}: {}", format_sqrt_price_x96_hex(sqrt_price_x96), e),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let pool_config = load_cfg(&opts.config)?;
    log::debug!("{:?}", pool_config);

    let sqrt_price_x96 = encode_sqrt_price_x96(
        pool_config.reserve0,
        pool_config.reserve1,
        pool_config.decimals0,
        pool_config.decimals1,
    )?;

    match opts.command.unwrap_or(CommandsName::SqrtPrice) {
        CommandsName::SqrtPrice => {
            println!("sqrtPriceX96: {}", sqrt_price_x96);
            println!("sqrtPriceX96 (hex): {}", format_sqrt_price_x96_hex(&sqrt_price_x96));
        }
        CommandsName::CheckInitPrice => println!("{}", check_init_price(&sqrt_price_x96)),
    }
    Ok(())
}
