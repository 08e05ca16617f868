use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bid-attach")]
#[command(about = "标书人员附件自动生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 目录覆盖（优先于配置文件和环境变量）
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// 人员资料根目录
    #[arg(long)]
    pub person_docs: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 启动 Web 表单服务
    Serve {
        /// 监听端口
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        dirs: DirArgs,
    },

    /// 不经过 Web 直接生成 Word
    Build {
        /// 项目经理
        #[arg(long)]
        pm: String,

        /// 技术负责人
        #[arg(long)]
        tech: String,

        /// 质量员
        #[arg(long)]
        quality: String,

        /// 安全员
        #[arg(long)]
        safety: String,

        #[command(flatten)]
        dirs: DirArgs,
    },

    /// 显示/修改配置
    Config {
        /// 设置人员资料根目录
        #[arg(long)]
        set_person_docs: Option<PathBuf>,

        /// 设置输出目录
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 设置监听端口
        #[arg(long)]
        set_port: Option<u16>,

        /// 显示配置
        #[arg(long)]
        show: bool,
    },
}
