use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sokuchi::{OffsetRequest, center, distance_and_center, offset_points};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 緯度・経度の計算を行う CLI。結果は JSON で標準出力に書き出す。
#[derive(Parser)]
#[command(name = "sokuchi", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 2点間の距離と中心点（緯度が先）
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },
    /// 2点の中心経緯度（経度が先）
    #[command(allow_negative_numbers = true)]
    Center {
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
    },
    /// 中心点から distance メートル離れた4点
    #[command(allow_negative_numbers = true)]
    Offset { lat: f64, lon: f64, distance: f64 },
    /// ランダムな英数字列
    Random { length: usize },
    /// タイムスタンプ（秒）を日時文字列に変換
    #[command(allow_negative_numbers = true)]
    Time {
        secs: i64,
        /// ローカルタイムではなく UTC で表示する
        #[arg(long)]
        utc: bool,
    },
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// サブコマンドを実行し、結果の JSON 文字列を返す。
fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let result = distance_and_center(lat1, lon1, lat2, lon2)
                .context("failed to compute distance")?;
            to_json(&result)
        }
        Command::Center {
            lon1,
            lat1,
            lon2,
            lat2,
        } => {
            let result = center(lon1, lat1, lon2, lat2).context("failed to compute center")?;
            to_json(&result)
        }
        Command::Offset { lat, lon, distance } => {
            let result = offset_points(OffsetRequest { lat, lon, distance })
                .context("failed to compute offset points")?;
            to_json(&result)
        }
        Command::Random { length } => {
            let result = sokuchi::random_string(length).context("failed to generate string")?;
            to_json(&result)
        }
        Command::Time { secs, utc } => {
            let result = if utc {
                sokuchi::conversion_time_in(secs, &Utc)
            } else {
                sokuchi::conversion_time(secs)
            }
            .context("failed to convert timestamp")?;
            to_json(&result)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    println!("{}", run(cli.command)?);
    Ok(())
}
