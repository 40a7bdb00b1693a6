//src/main.rs

use solar_leads::{
    common::error::AppError,
    config::{AppConfig, AppState},
    session::Session,
};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: sem configuração o app não deve subir.
    let config = AppConfig::from_env().expect("Falha ao carregar a configuração.");

    let session = match Session::restore(&config.session_file)
        .expect("Falha ao ler a sessão persistida.")
    {
        Some(session) => session,
        None => {
            tracing::error!("🔒 Nenhuma sessão encontrada. Faça login pelo aplicativo web.");
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Sessão restaurada para {}.", session.user.email);

    let session_file = config.session_file.clone();
    let state = AppState::new(config, session);

    // Termo de busca opcional na linha de comando.
    let search = std::env::args().nth(1);

    match state.board.load(search.as_deref()).await {
        Ok(()) => {}
        Err(AppError::Auth) => {
            // Tratamento global: derruba a sessão e manda para o login.
            Session::clear(&session_file).expect("Falha ao limpar a sessão.");
            tracing::error!("🔒 Sessão expirada. Faça login novamente.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("🔥 Falha ao carregar o board: {}", e);
            std::process::exit(1);
        }
    }

    // Renderiza o kanban no terminal.
    let board = state.board.board().await;
    for (stage, column) in board.iter() {
        println!("== {} ({})", stage, column.leads.len() + column.overflow);
        for lead in &column.leads {
            match lead.next_contact {
                Some(date) => println!("  - {} (próximo contato: {})", lead.name, date),
                None => println!("  - {}", lead.name),
            }
        }
        if column.overflow > 0 {
            println!("  ... e mais {}", column.overflow);
        }
    }
    println!("Total: {} leads", board.total());
}
