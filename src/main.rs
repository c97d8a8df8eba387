use clap::Parser;
use contactbook::cli::{
    run_add, run_avatar, run_delete, run_edit, run_list, run_menu, run_open, run_profile, run_search,
    run_settings, run_share, run_show, Cli, Commands, Context,
};
use contactbook::config::Config;
use contactbook::db::Database;
use contactbook::logging;
use contactbook::sections::SortOrder;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db, cli.verbose)?;
    logging::init(&config.log_filter);

    let db = Database::open_at(&config.db_path)?;
    let ctx = Context::new(db);

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&ctx)?;
        }
        Some(Commands::List(args)) => {
            run_list(&ctx, &args.query, order_of(args.desc))?;
        }
        Some(Commands::Search(args)) => {
            run_search(&ctx, &args.query, order_of(args.desc))?;
        }
        Some(Commands::Show(args)) => {
            run_show(&ctx, &args.identifier)?;
        }
        Some(Commands::Add(fields)) => {
            run_add(&ctx, fields)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&ctx, &args.identifier, args.fields)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&ctx, &args.identifier, args.force)?;
        }
        Some(Commands::Avatar(args)) => {
            run_avatar(&ctx, &args.identifier, args.path.as_deref(), args.clear)?;
        }
        Some(Commands::Share(args)) => {
            run_share(&ctx, &args.identifier)?;
        }
        Some(Commands::Open(args)) => {
            run_open(&ctx, &args.identifier, &args.action)?;
        }
        Some(Commands::Profile(args)) => {
            run_profile(&ctx, args)?;
        }
        Some(Commands::Settings(args)) => {
            run_settings(&ctx, args.action)?;
        }
    }

    Ok(())
}

fn order_of(desc: bool) -> SortOrder {
    if desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    }
}
