mod player_cache;
