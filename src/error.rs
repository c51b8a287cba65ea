use std::backtrace::Backtrace;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub backtrace: Backtrace,
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(e: E) -> Self {
        Self {
            kind: e.into(),
            backtrace: Backtrace::capture(),
        }
    }
}

impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("ファイル名を指定してください")]
    MissingArgument,
    #[error("ファイル名に拡張子が存在しません")]
    MissingExtension,
    #[error("拡張子 {0} は対応しておりません")]
    UnsupportedExtension(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("jpgまたはpngファイルを指定してください")]
    UnsupportedFormat,
    #[error("{0}")]
    Decode(image::ImageError),
    #[error("{0}")]
    Encode(image::ImageError),
    #[error("予期せぬエラーが発生しました")]
    Internal,
}
