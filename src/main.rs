use anyhow::{Context, Result, bail};
use tint_config::TintConfig;
use tint_platform::dialog::{DialogIcon, DialogLabels, DialogResponse, show_yes_no_dialog};
use tint_platform::{
    ArboardClipboard, ClipboardShareTarget, LogToaster, RfdDialogHost, copy_text_to_clipboard,
    share_page,
};
use tint_utils::{
    ButtonImageFactory, DensitySource, DeviceProfile, FileFrameSource, PackageInfo,
    PackageRegistry, SizeResolver, ThumbnailDimensions, application_version_code, changelog,
};

const USAGE: &str = "usage: tint <command>

commands:
  sizes                     favicon and button sizes for the configured density
  button <icon> <out.png>   composite a favicon onto the button frame
  thumbnail                 bookmark thumbnail dimensions
  changelog                 print the changelog
  version                   print the application version code
  copy <text> [toast]       copy text to the clipboard
  share <title> <url>       share a page
  confirm <title> <message> ask a yes/no question
  config                    print the effective configuration";

fn init_logging(config: &TintConfig) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.logging.filter);
    let _ = builder.try_init();
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    match args.get(index) {
        Some(value) => Ok(value.as_str()),
        None => bail!("missing <{}>\n\n{}", name, USAGE),
    }
}

fn main() -> Result<()> {
    let config = TintConfig::load();
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let profile = DeviceProfile::from_config(&config.device);
    let resolver = SizeResolver::new();
    log::debug!(
        "device: {} dpi ({:?}), tablet={}",
        profile.density_dpi,
        profile.density_tier(),
        profile.is_tablet()
    );

    match command.as_str() {
        "sizes" => {
            println!("density: {} dpi ({:?})", profile.density_dpi, profile.density_tier());
            println!("favicon: {}px", resolver.favicon_size(&profile));
            println!("button:  {}px", resolver.button_size(&profile));
        }
        "button" => {
            let icon_path = arg(&args, 1, "icon")?;
            let out_path = arg(&args, 2, "out.png")?;
            let icon = image::open(icon_path)
                .with_context(|| format!("failed to open favicon {}", icon_path))?
                .to_rgba8();

            let frames = FileFrameSource::new(&config.resources.button_frame);
            let factory = ButtonImageFactory::new(&resolver, &profile, frames);
            match factory.button_image(Some(&icon))? {
                Some(button) => {
                    button
                        .save(out_path)
                        .with_context(|| format!("failed to write {}", out_path))?;
                    log::info!("wrote {}x{} button to {}", button.width(), button.height(), out_path);
                }
                None => log::warn!("no button image produced"),
            }
        }
        "thumbnail" => {
            let (w, h) = ThumbnailDimensions::new().get(&config.resources.bookmark_thumbnail)?;
            println!("{}x{}", w, h);
        }
        "changelog" => {
            print!("{}", changelog(&config.resources));
        }
        "version" => {
            let mut registry = PackageRegistry::new();
            registry.register(PackageInfo::from_version(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            )?);
            match application_version_code(&registry, env!("CARGO_PKG_NAME")) {
                Some(code) => println!("{} ({})", env!("CARGO_PKG_VERSION"), code),
                None => println!("unknown"),
            }
        }
        "copy" => {
            let text = arg(&args, 1, "text")?;
            let toast = args.get(2).map(String::as_str);
            let mut clipboard = ArboardClipboard::new()?;
            copy_text_to_clipboard(&mut clipboard, &LogToaster, text, toast)?;
        }
        "share" => {
            let title = arg(&args, 1, "title")?;
            let url = arg(&args, 2, "url")?;
            let mut target = ClipboardShareTarget::new(ArboardClipboard::new()?);
            share_page(&mut target, title, url, "Share via")?;
        }
        "confirm" => {
            let title = arg(&args, 1, "title")?;
            let message = arg(&args, 2, "message")?;
            let response = show_yes_no_dialog(
                &RfdDialogHost,
                &DialogLabels::default(),
                DialogIcon::Info,
                title,
                message,
                || log::info!("confirmed"),
            );
            if response != DialogResponse::Positive {
                std::process::exit(1);
            }
        }
        "config" => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        other => bail!("unknown command {:?}\n\n{}", other, USAGE),
    }

    Ok(())
}
