use anyhow::Result;
use bid_attach::{cli, config, export, web};
use bid_attach_common::Staffing;
use clap::Parser;
use cli::{Cli, Commands, DirArgs};
use config::Config;

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("bid_attach={}", level).parse()?)
                .add_directive(format!("tower_http={}", level).parse()?),
        )
        .init();
    Ok(())
}

fn apply_dirs(mut config: Config, dirs: DirArgs) -> Config {
    if let Some(dir) = dirs.person_docs {
        config.person_docs_dir = dir;
    }
    if let Some(dir) = dirs.output {
        config.output_dir = dir;
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Serve { port, dirs } => {
            let mut config = apply_dirs(Config::load()?, dirs);
            if let Some(port) = port {
                config.port = port;
            }
            web::serve(config).await?;
        }

        Commands::Build { pm, tech, quality, safety, dirs } => {
            println!("📄 bid-attach - 生成人员附件\n");

            let config = apply_dirs(Config::load()?, dirs);
            let staffing = Staffing::new(pm, tech, quality, safety);

            let generated = tokio::task::spawn_blocking(move || export::generate(&config, &staffing))
                .await??;

            println!("✔ 页数: {}", generated.page_count);
            if generated.expired_count > 0 {
                println!("⚠️ 已过有效期: {}", generated.expired_count);
            }
            if generated.notice_count > 0 {
                println!("⚠️ 未找到资料文件夹: {}人", generated.notice_count);
            }
            println!("✔ 输出: {}", generated.path.display());
            println!("\n✅ 完成");
        }

        Commands::Config { set_person_docs, set_output, set_port, show } => {
            // 环境变量不写回配置文件
            let mut config = Config::load_from(&Config::config_path()?)?;
            let changed = set_person_docs.is_some() || set_output.is_some() || set_port.is_some();

            if let Some(dir) = set_person_docs {
                config.person_docs_dir = dir;
            }
            if let Some(dir) = set_output {
                config.output_dir = dir;
            }
            if let Some(port) = set_port {
                config.port = port;
            }
            if changed {
                config.save()?;
                println!("✔ 配置已保存: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("配置:");
                println!("  人员资料目录: {}", config.person_docs_dir.display());
                println!("  输出目录: {}", config.output_dir.display());
                println!("  端口: {}", config.port);
                println!("  图片宽度: {}英寸", config.image_width_inches);
                println!("  最大像素宽度: {}px", config.max_image_px);
            }
        }
    }

    Ok(())
}
