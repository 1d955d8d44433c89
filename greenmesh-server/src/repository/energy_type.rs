//! Energy Type Repository

use sqlx::PgPool;

/// Register an energy type; an existing code is left untouched
pub async fn create(pool: &PgPool, code: &str, name: &str, category: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO dim_energy_type (energy_type_code, name, category)
        VALUES ($1, $2, $3)
        ON CONFLICT (energy_type_code) DO NOTHING
        "#,
    )
    .bind(code)
    .bind(name)
    .bind(category)
    .execute(pool)
    .await?;

    Ok(())
}
