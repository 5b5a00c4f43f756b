//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Generate a deterministic password from an image
#[derive(Parser, Debug)]
#[command(name = "imgtopwd")]
#[command(version, about = "Generate a deterministic password from an image.", long_about = None)]
#[command(after_help = "EXAMPLES:
    # 16 alphanumeric characters from a photo
    imgtopwd -i photo.png

    # 24 characters including specials, mixed with a seed
    imgtopwd -i photo.png -l 24 -s --seed github.com")]
pub struct Args {
    /// Path to the image file
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Length of the generated password (at most 32 characters are produced)
    #[arg(short = 'l', default_value_t = 16, allow_negative_numbers = true)]
    pub length: i64,

    /// Allow special characters in the password
    #[arg(short = 's')]
    pub special: bool,

    /// Text mixed into the hash ahead of the image data
    #[arg(long)]
    pub seed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["imgtopwd"]);
        assert!(args.image.is_none());
        assert_eq!(args.length, 16);
        assert!(!args.special);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_args_image_short_and_long() {
        let args = Args::parse_from(["imgtopwd", "-i", "a.png"]);
        assert_eq!(args.image, Some(PathBuf::from("a.png")));

        let args = Args::parse_from(["imgtopwd", "--image", "/tmp/b.jpg"]);
        assert_eq!(args.image, Some(PathBuf::from("/tmp/b.jpg")));
    }

    #[test]
    fn test_args_length() {
        let args = Args::parse_from(["imgtopwd", "-l", "24"]);
        assert_eq!(args.length, 24);

        let args = Args::parse_from(["imgtopwd", "-l", "0"]);
        assert_eq!(args.length, 0);
    }

    #[test]
    fn test_args_negative_length_accepted() {
        let args = Args::parse_from(["imgtopwd", "-l", "-4"]);
        assert_eq!(args.length, -4);
    }

    #[test]
    fn test_args_length_must_be_integer() {
        assert!(Args::try_parse_from(["imgtopwd", "-l", "abc"]).is_err());
    }

    #[test]
    fn test_args_special_flag() {
        let args = Args::parse_from(["imgtopwd", "-s"]);
        assert!(args.special);
    }

    #[test]
    fn test_args_seed() {
        let args = Args::parse_from(["imgtopwd", "--seed", "github.com"]);
        assert_eq!(args.seed, Some("github.com".to_string()));
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "imgtopwd", "-i", "x.png", "-l", "8", "-s", "--seed", "pepper",
        ]);
        assert_eq!(args.image, Some(PathBuf::from("x.png")));
        assert_eq!(args.length, 8);
        assert!(args.special);
        assert_eq!(args.seed.as_deref(), Some("pepper"));
    }

    #[test]
    fn test_args_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["imgtopwd", "--shell", "zsh"]).is_err());
    }
}
