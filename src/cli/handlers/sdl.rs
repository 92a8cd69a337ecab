use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_sdl(ctx: CommandContext) -> Result<()> {
    let schema = build_schema(ctx.store);
    println!("{}", schema.sdl());
    Ok(())
}
