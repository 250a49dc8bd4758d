use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            display_name VARCHAR(255) NULL,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'Rider',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_role CHECK (role IN ('Rider', 'Instructor', 'Manager', 'Admin'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create instructors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instructors (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            specialty VARCHAR(255) NOT NULL DEFAULT '',
            bio TEXT NOT NULL DEFAULT '',
            image_url TEXT NULL,
            user_id UUID NULL REFERENCES users(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create horses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS horses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            breed VARCHAR(255) NOT NULL,
            age INTEGER NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            image_url TEXT NULL,
            suitability VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_suitability CHECK (suitability IN ('Beginner', 'Intermediate', 'Advanced', 'Therapy'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weekly_availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            instructor_id UUID NOT NULL REFERENCES instructors(id) ON DELETE CASCADE,
            week_start_date DATE NOT NULL,
            CONSTRAINT one_record_per_week UNIQUE (instructor_id, week_start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability_intervals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability_intervals (
            availability_id UUID NOT NULL REFERENCES weekly_availability(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            PRIMARY KEY (availability_id, position)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create lessons table
    // No uniqueness on (instructor_id, date, time): concurrent bookings of
    // one slot are not prevented here.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lessons (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id),
            user_name VARCHAR(255) NOT NULL,
            lesson_type VARCHAR(32) NOT NULL DEFAULT 'Regular',
            instructor_id UUID NOT NULL REFERENCES instructors(id),
            horse_id UUID NULL REFERENCES horses(id),
            date DATE NOT NULL,
            time TIME NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'Pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_status CHECK (status IN ('Pending', 'Confirmed', 'Cancelled')),
            CONSTRAINT valid_lesson_type CHECK (lesson_type IN ('Regular', 'Therapy'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create rentals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rentals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id),
            user_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            time TIME NOT NULL,
            guests INTEGER NOT NULL,
            notes TEXT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'Pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_guests CHECK (guests BETWEEN 1 AND 50),
            CONSTRAINT valid_rental_status CHECK (status IN ('Pending', 'Confirmed', 'Cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create team_messages table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_messages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id),
            user_name VARCHAR(255) NOT NULL,
            text TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_instructors_user_id ON instructors(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_lessons_instructor_date ON lessons(instructor_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_lessons_horse_date ON lessons(horse_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_lessons_user_id ON lessons(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_rentals_date ON rentals(date, time)",
        "CREATE INDEX IF NOT EXISTS idx_team_messages_created_at ON team_messages(created_at)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
