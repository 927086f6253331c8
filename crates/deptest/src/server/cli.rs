use super::external::DEFAULT_EXTERNAL_URL;

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Secret used to sign tokens issued by /api/login
    #[arg(long, env = "DEPTEST_JWT_SECRET", default_value = "secret-key")]
    pub jwt_secret: String,

    /// Upstream document fetched by /api/external
    #[arg(long, env = "DEPTEST_EXTERNAL_URL", default_value = DEFAULT_EXTERNAL_URL)]
    pub external_url: String,
}
